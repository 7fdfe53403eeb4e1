/// Filesystem magic of the cgroup v1 pseudo-filesystem.
pub const CGROUP_SUPER_MAGIC: u64 = 0x0027_e0eb;
/// Filesystem magic of the cgroup v2 pseudo-filesystem.
pub const CGROUP2_SUPER_MAGIC: u64 = 0x6367_7270;

/// cgroup filesystem generation a path is mounted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CgroupVersion {
    V1,
    V2,
}

impl CgroupVersion {
    /// Maps a `statfs(2)` filesystem magic to the cgroup version it denotes.
    pub fn from_magic(magic: u64) -> Option<Self> {
        match magic {
            CGROUP_SUPER_MAGIC => Some(CgroupVersion::V1),
            CGROUP2_SUPER_MAGIC => Some(CgroupVersion::V2),
            _ => None,
        }
    }
}

impl std::fmt::Display for CgroupVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CgroupVersion::V1 => f.write_str("v1"),
            CgroupVersion::V2 => f.write_str("v2"),
        }
    }
}
