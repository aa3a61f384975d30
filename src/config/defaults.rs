//! Default configuration values

/// Package manager binary
pub const ZYPPER_BINARY: &str = "zypper";

/// Locale forced on every zypper invocation so its output is not translated
pub const ZYPPER_LOCALE: &str = "C";

/// Directory holding zypper credential files (relative to the filesystem root)
pub const CREDENTIALS_DIR: &str = "/etc/zypp/credentials.d";

/// File name of the system (base registration) credentials
pub const GLOBAL_CREDENTIALS_FILE: &str = "SCCcredentials";

/// Default location of the suseconnect configuration file
pub const CONFIG_FILE: &str = "/etc/suseconnect.toml";

/// Environment variable overriding the filesystem root
pub const ENV_FS_ROOT: &str = "SUSECONNECT_FS_ROOT";

/// Environment variable overriding the configuration file path
pub const ENV_CONFIG_FILE: &str = "SUSECONNECT_CONFIG";

/// Priority zypper assigns to repositories without an explicit one
pub const DEFAULT_REPO_PRIORITY: u32 = 99;

/// File mode of written credential files
pub const CREDENTIALS_FILE_MODE: u32 = 0o600;

/// zypper exit status when another process holds the zypp lock
pub const ZYPPER_EXIT_ZYPP_LOCKED: i32 = 7;

/// zypper exit statuses that only carry information and count as success
///
/// 100: updates needed, 101: security updates needed, 102: reboot needed,
/// 103: restart of zypper needed, 106: some repositories were skipped.
pub const ZYPPER_INFO_EXIT_CODES: [i32; 5] = [100, 101, 102, 103, 106];
