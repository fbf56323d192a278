//! Client and API version values.
//!
//! qBittorrent reports two version numbers: the application version
//! (`app/version`, e.g. `v4.6.3`) and the WebUI API version
//! (`app/webapiVersion`, e.g. `2.9.3`). Both are ordered value types so
//! callers (and the client itself) can gate behavior on server capability.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Pre-release stage of a [`ClientVersion`].
///
/// Ordering follows the release pipeline: `alpha < beta < rc < release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Alpha pre-release, e.g. `4.3.0alpha1`.
    Alpha(u32),
    /// Beta pre-release, e.g. `4.4.0beta2`.
    Beta(u32),
    /// Release candidate.
    Rc(u32),
    /// Final release (no suffix).
    Release,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alpha(0) => write!(f, "alpha"),
            Self::Alpha(n) => write!(f, "alpha{n}"),
            Self::Beta(0) => write!(f, "beta"),
            Self::Beta(n) => write!(f, "beta{n}"),
            Self::Rc(0) => write!(f, "rc"),
            Self::Rc(n) => write!(f, "rc{n}"),
            Self::Release => Ok(()),
        }
    }
}

/// qBittorrent application version.
///
/// Format: `major.minor.patch[.build][stage]`, with an optional leading `v`.
///
/// # Example
///
/// ```
/// use qbt_core::ClientVersion;
///
/// let a: ClientVersion = "4.4.0beta2".parse().expect("version");
/// let b: ClientVersion = "v4.4.0".parse().expect("version");
/// assert!(a < b);
/// assert_eq!(b.to_string(), "4.4.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientVersion {
    /// Major number.
    pub major: u32,
    /// Minor number.
    pub minor: u32,
    /// Patch number.
    pub patch: u32,
    /// Build number, `0` when absent (e.g. `4.4.3.1`).
    pub build: u32,
    /// Pre-release stage.
    pub stage: Stage,
}

impl ClientVersion {
    /// Creates a final-release version.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            build: 0,
            stage: Stage::Release,
        }
    }

    /// Parses a version string as reported by `app/version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mapper`] if the string does not match
    /// `v?major.minor[.patch[.build]][alpha|beta|rc[N]]`.
    pub fn parse(version: &str) -> Result<Self> {
        let bad = || Error::mapper("client_version", format!("bad version: {version:?}"));

        let body = version.strip_prefix(['v', 'V']).unwrap_or(version);

        // split the dotted numeric part from the stage suffix
        let split = body
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(body.len());
        let (numbers, suffix) = body.split_at(split);

        let mut parts = numbers.split('.');
        let major = parse_u32(parts.next()).ok_or_else(bad)?;
        let minor = parse_u32(parts.next()).ok_or_else(bad)?;
        let patch = match parts.next() {
            Some(s) => parse_u32(Some(s)).ok_or_else(bad)?,
            None => 0,
        };
        let build = match parts.next() {
            Some(s) => parse_u32(Some(s)).ok_or_else(bad)?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(bad());
        }

        let stage = parse_stage(suffix).ok_or_else(bad)?;

        Ok(Self {
            major,
            minor,
            patch,
            build,
            stage,
        })
    }
}

fn parse_u32(part: Option<&str>) -> Option<u32> {
    let part = part?;
    if part.is_empty() {
        return None;
    }
    part.parse().ok()
}

fn parse_stage(suffix: &str) -> Option<Stage> {
    if suffix.is_empty() {
        return Some(Stage::Release);
    }

    let lower = suffix.to_ascii_lowercase();
    let (ctor, digits): (fn(u32) -> Stage, &str) = if let Some(rest) = lower.strip_prefix("alpha") {
        (Stage::Alpha, rest)
    } else if let Some(rest) = lower.strip_prefix("beta") {
        (Stage::Beta, rest)
    } else if let Some(rest) = lower.strip_prefix("rc") {
        (Stage::Rc, rest)
    } else {
        return None;
    };

    if digits.is_empty() {
        Some(ctor(0))
    } else {
        digits.parse().ok().map(ctor)
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.build != 0 {
            write!(f, ".{}", self.build)?;
        }
        write!(f, "{}", self.stage)
    }
}

impl FromStr for ClientVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// WebUI API version.
///
/// Format: `major.minor[.release]`. Comparisons are plain lexicographic
/// over the three numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    /// Major number.
    pub major: u32,
    /// Minor number.
    pub minor: u32,
    /// Release number, `0` when absent.
    pub release: u32,
}

impl ApiVersion {
    /// Creates an API version.
    #[must_use]
    pub const fn new(major: u32, minor: u32, release: u32) -> Self {
        Self {
            major,
            minor,
            release,
        }
    }

    /// Parses a version string as reported by `app/webapiVersion`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mapper`] if the string does not match
    /// `major.minor[.release]`.
    pub fn parse(version: &str) -> Result<Self> {
        let bad = || Error::mapper("api_version", format!("bad API version: {version:?}"));

        let mut parts = version.split('.');
        let major = parse_u32(parts.next()).ok_or_else(bad)?;
        let minor = parse_u32(parts.next()).ok_or_else(bad)?;
        let release = match parts.next() {
            Some(s) => parse_u32(Some(s)).ok_or_else(bad)?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(bad());
        }

        Ok(Self::new(major, minor, release))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.release)
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Checks a cached server API version against a method's minimum.
///
/// An unknown version (`None`) is treated as the newest and always passes;
/// the check is a local precondition, not a wire round-trip.
///
/// # Errors
///
/// Returns [`Error::Version`] when `current` is known and below `minimum`.
pub fn version_check(current: Option<ApiVersion>, minimum: ApiVersion) -> Result<()> {
    match current {
        Some(current) if current < minimum => Err(Error::Version {
            required: minimum,
            current,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn client_version_parse() {
        let v = ClientVersion::parse("4.2.5").expect("version");
        assert_eq!(v, ClientVersion::new(4, 2, 5));

        let v = ClientVersion::parse("v4.4.3.1").expect("version");
        assert_eq!(v.build, 1);
        assert_eq!(v.to_string(), "4.4.3.1");

        let v = ClientVersion::parse("4.4.0beta2").expect("version");
        assert_eq!(v.stage, Stage::Beta(2));
        assert_eq!(v.to_string(), "4.4.0beta2");
    }

    #[test]
    fn client_version_parse_rejects_garbage() {
        for bad in ["", "4", "4.", "x.y", "4.2.5.6.7", "4.2.5gamma"] {
            check!(ClientVersion::parse(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn client_version_ordering() {
        let alpha = ClientVersion::parse("4.3.0alpha1").expect("version");
        let beta = ClientVersion::parse("4.3.0beta1").expect("version");
        let rc = ClientVersion::parse("4.3.0rc2").expect("version");
        let release = ClientVersion::parse("4.3.0").expect("version");

        check!(alpha < beta);
        check!(beta < rc);
        check!(rc < release);
        check!(release < ClientVersion::new(4, 3, 1));
    }

    #[test]
    fn api_version_parse() {
        assert_eq!(
            ApiVersion::parse("2.8.3").expect("version"),
            ApiVersion::new(2, 8, 3)
        );
        assert_eq!(
            ApiVersion::parse("2.9").expect("version"),
            ApiVersion::new(2, 9, 0)
        );
        check!(ApiVersion::parse("2").is_err());
        check!(ApiVersion::parse("2.9.3.1").is_err());
    }

    #[test]
    fn api_version_ordering() {
        check!(ApiVersion::new(2, 8, 3) < ApiVersion::new(2, 9, 0));
        check!(ApiVersion::new(2, 10, 0) > ApiVersion::new(2, 9, 9));
    }

    #[test]
    fn version_check_gates() {
        // unknown version is treated as the newest
        check!(version_check(None, ApiVersion::new(2, 8, 0)).is_ok());
        check!(version_check(Some(ApiVersion::new(2, 9, 0)), ApiVersion::new(2, 8, 0)).is_ok());

        let err = version_check(Some(ApiVersion::new(2, 2, 0)), ApiVersion::new(2, 3, 0))
            .expect_err("below minimum");
        check!(err.to_string().contains("2.3.0"));
        check!(err.to_string().contains("2.2.0"));
    }
}
