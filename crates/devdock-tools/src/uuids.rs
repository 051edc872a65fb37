//! UUID generation

use std::fmt;

use uuid::Uuid;

/// Name hashed by the name-based versions unless another one is set
pub const DEFAULT_NAME: &str = "example.com";

/// Supported UUID versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UuidVersion {
    V1,
    V3,
    #[default]
    V4,
    V5,
}

impl UuidVersion {
    pub const ALL: [UuidVersion; 4] = [UuidVersion::V1, UuidVersion::V4, UuidVersion::V3, UuidVersion::V5];

    pub fn label(&self) -> &'static str {
        match self {
            UuidVersion::V1 => "v1",
            UuidVersion::V3 => "v3",
            UuidVersion::V4 => "v4",
            UuidVersion::V5 => "v5",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UuidVersion::V1 => "Timestamp-based UUID. Generated using the current timestamp and node ID.",
            UuidVersion::V3 => "Name-based UUID using MD5 hashing.",
            UuidVersion::V4 => "Random UUID. Generated using random or pseudo-random numbers.",
            UuidVersion::V5 => "Name-based UUID using SHA-1 hashing.",
        }
    }

    /// Whether the version hashes a name instead of using time or randomness
    pub fn is_name_based(&self) -> bool {
        matches!(self, UuidVersion::V3 | UuidVersion::V5)
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// UUID generator
///
/// Name-based versions hash `name` in the DNS namespace. Version 1 uses a
/// random node id picked once per generator, with the multicast bit set
/// as required for ids not derived from a MAC address.
#[derive(Debug, Clone)]
pub struct UuidGenerator {
    name: String,
    node_id: [u8; 6],
}

impl UuidGenerator {
    pub fn new() -> Self {
        let mut node_id = [0u8; 6];
        node_id.copy_from_slice(&Uuid::new_v4().as_bytes()[..6]);
        node_id[0] |= 0x01;

        Self {
            name: DEFAULT_NAME.to_string(),
            node_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn generate(&self, version: UuidVersion) -> Uuid {
        match version {
            UuidVersion::V1 => Uuid::now_v1(&self.node_id),
            UuidVersion::V3 => Uuid::new_v3(&Uuid::NAMESPACE_DNS, self.name.as_bytes()),
            UuidVersion::V4 => Uuid::new_v4(),
            UuidVersion::V5 => Uuid::new_v5(&Uuid::NAMESPACE_DNS, self.name.as_bytes()),
        }
    }

    /// Hyphenated lowercase form
    pub fn generate_string(&self, version: UuidVersion) -> String {
        self.generate(version).hyphenated().to_string()
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_are_tagged() {
        let generator = UuidGenerator::new();
        for (version, number) in UuidVersion::ALL.into_iter().zip([1, 4, 3, 5]) {
            let id = generator.generate(version);
            assert_eq!(id.get_version_num(), number, "{version}");
        }
    }

    #[test]
    fn test_name_based_are_deterministic() {
        let mut generator = UuidGenerator::new();
        generator.set_name("python.org");
        assert_eq!(
            generator.generate_string(UuidVersion::V5),
            "886313e1-3b8a-5372-9b90-0c9aee199e5d"
        );
        assert_eq!(
            generator.generate_string(UuidVersion::V3),
            "6fa459ea-ee8a-3ca4-894e-db77e160355e"
        );
        assert_eq!(UuidGenerator::new().name(), DEFAULT_NAME);
    }

    #[test]
    fn test_random_versions_differ() {
        let generator = UuidGenerator::new();
        assert_ne!(generator.generate(UuidVersion::V4), generator.generate(UuidVersion::V4));
        assert_ne!(generator.generate(UuidVersion::V1), generator.generate(UuidVersion::V1));
    }
}
