//! # File I/O Module
//!
//! Project, catalog and settings files on local or shared drives.
//!
//! Every save goes through a sibling `.tmp` file that is synced and then
//! renamed over the target, so readers never see a half-written quote.
//! Project files can additionally be guarded by a [`FileLock`]: an fs2
//! exclusive lock on `<file>.lock` whose JSON body says who holds it.
//! Loading a project checks its schema version.
//!
//! ## File Formats
//!
//! - Projects: `.fnq` JSON, lock file `.fnq.lock`
//! - Catalogs: JSON matching [`Catalog`]
//! - Settings: JSON matching [`EngineSettings`], every field optional
//!
//! ## Example
//!
//! ```rust,no_run
//! use window_core::file_io::{save_project, load_project, FileLock};
//! use window_core::project::Project;
//! use std::path::Path;
//!
//! let path = Path::new("quote.fnq");
//! let _lock = FileLock::acquire(path, "estimator@company.com")?;
//! let mut project = load_project(path)?;
//! project.touch();
//! save_project(&project, path)?;
//! # Ok::<(), window_core::CalcError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};
use crate::settings::EngineSettings;

/// Locks older than this are taken over regardless of their holder.
pub const MAX_LOCK_AGE_HOURS: i64 = 24;

/// Who holds a project open; the body of a `.lock` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockInfo {
    /// Estimator name or email
    pub user: String,
    pub machine: String,
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    pub fn for_current_process(user: impl Into<String>) -> Self {
        LockInfo {
            user: user.into(),
            machine: machine_name(),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }

    /// True when the holder can no longer be editing the file.
    pub fn is_stale(&self) -> bool {
        if Utc::now() - self.locked_at > Duration::hours(MAX_LOCK_AGE_HOURS) {
            return true;
        }
        self.machine == machine_name() && !process_alive(self.pid)
    }
}

fn machine_name() -> String {
    ["HOSTNAME", "HOST", "COMPUTERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(target_os = "linux")]
fn process_alive(pid: u32) -> bool {
    Path::new("/proc").join(pid.to_string()).exists()
}

// Without a cheap liveness probe only the age limit applies
#[cfg(not(target_os = "linux"))]
fn process_alive(_pid: u32) -> bool {
    true
}

/// Exclusive edit lock on a project file, released on drop.
#[derive(Debug)]
pub struct FileLock {
    project_path: PathBuf,
    lock_path: PathBuf,
    _handle: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Take the lock for `user`, or fail with `FileLocked` naming the holder.
    ///
    /// A stale lock (see [`LockInfo::is_stale`]) is taken over with a warning.
    pub fn acquire(path: &Path, user: impl Into<String>) -> CalcResult<Self> {
        let lock_path = sibling(path, "lock");

        if let Some(holder) = read_lock(&lock_path) {
            if !holder.is_stale() {
                return Err(CalcError::file_locked(
                    path.display().to_string(),
                    format!("{} ({})", holder.user, holder.machine),
                    holder.locked_at.to_rfc3339(),
                ));
            }
            warn!(path = %path.display(), holder = %holder.user, "taking over stale lock");
        }

        // Holder metadata is only rewritten once the OS lock is ours
        #[allow(clippy::suspicious_open_options)]
        let mut handle = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&lock_path)
            .map_err(io_error("open lock", &lock_path))?;

        handle.try_lock_exclusive().map_err(|_| {
            let holder = read_lock(&lock_path)
                .map(|info| format!("{} ({})", info.user, info.machine))
                .unwrap_or_else(|| "another process".to_string());
            CalcError::file_locked(path.display().to_string(), holder, "now")
        })?;

        let info = LockInfo::for_current_process(user);
        let json = to_json(&info)?;
        handle
            .set_len(0)
            .and_then(|_| handle.write_all(json.as_bytes()))
            .and_then(|_| handle.sync_all())
            .map_err(io_error("write lock", &lock_path))?;

        debug!(path = %path.display(), user = %info.user, "lock acquired");
        Ok(FileLock {
            project_path: path.to_path_buf(),
            lock_path,
            _handle: handle,
            info,
        })
    }

    /// The live holder of `path`, if any.
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_lock(&sibling(path, "lock")).filter(|info| !info.is_stale())
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // fs2 releases the OS lock when the handle closes
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// `quote.fnq` + `lock` -> `quote.fnq.lock`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

fn read_lock(lock_path: &Path) -> Option<LockInfo> {
    if !lock_path.exists() {
        return None;
    }
    read_json(lock_path, "read lock").ok()
}

fn io_error<'a>(operation: &'a str, path: &'a Path) -> impl Fn(std::io::Error) -> CalcError + 'a {
    move |e| CalcError::file_error(operation, path.display().to_string(), e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> CalcResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })
}

fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = to_json(value)?;
    let tmp_path = sibling(path, "tmp");

    let written = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(json.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error("write temp file", &tmp_path)(e));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        io_error("replace", path)(e)
    })?;

    debug!(path = %path.display(), bytes = json.len(), "saved");
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path, operation: &str) -> CalcResult<T> {
    let contents = fs::read_to_string(path).map_err(io_error(operation, path))?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("{}: {}", path.display(), e),
    })
}

/// Save a project (atomic).
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    write_json_atomic(project, path)
}

/// Load a project and check its schema version.
///
/// Fails with `FileError`, `SerializationError` or `VersionMismatch`.
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let project: Project = read_json(path, "read project")?;
    check_schema_version(&project.meta.version)?;
    Ok(project)
}

/// Load a project along with the live lock holder, if any.
pub fn load_project_with_lock_check(path: &Path) -> CalcResult<(Project, Option<LockInfo>)> {
    Ok((load_project(path)?, FileLock::check(path)))
}

pub fn save_catalog(catalog: &Catalog, path: &Path) -> CalcResult<()> {
    write_json_atomic(catalog, path)
}

pub fn load_catalog(path: &Path) -> CalcResult<Catalog> {
    let catalog: Catalog = read_json(path, "read catalog")?;
    debug!(
        path = %path.display(),
        systems = catalog.systems.len(),
        profiles = catalog.profiles.len(),
        hardware = catalog.hardware.len(),
        glass = catalog.glass.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load settings overrides; missing fields keep their defaults.
pub fn load_settings(path: &Path) -> CalcResult<EngineSettings> {
    let settings: EngineSettings = read_json(path, "read settings")?;
    settings.validate()?;
    Ok(settings)
}

/// Same major version, and while on 0.x no newer minor version.
fn check_schema_version(file_version: &str) -> CalcResult<()> {
    let parse = |v: &str| -> Option<(u32, u32)> {
        let mut parts = v.split('.').map(str::parse::<u32>);
        match (parts.next(), parts.next()) {
            (Some(Ok(major)), Some(Ok(minor))) => Some((major, minor)),
            (Some(Ok(major)), None) => Some((major, 0)),
            _ => None,
        }
    };

    let compatible = match (parse(file_version), parse(SCHEMA_VERSION)) {
        (Some((file_major, file_minor)), Some((major, minor))) => {
            file_major == major && (major > 0 || file_minor <= minor)
        }
        _ => false,
    };

    if compatible {
        Ok(())
    } else {
        Err(CalcError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    fn scratch(name: &str, ext: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fenestra_io_{}_{}.{}", name, std::process::id(), ext))
    }

    #[test]
    fn test_sibling_paths() {
        assert_eq!(sibling(Path::new("/jobs/quote.fnq"), "lock"), Path::new("/jobs/quote.fnq.lock"));
        assert_eq!(sibling(Path::new("catalog.json"), "tmp"), Path::new("catalog.json.tmp"));
        assert_eq!(sibling(Path::new("noext"), "lock"), Path::new("noext.lock"));
    }

    #[test]
    fn test_project_roundtrip_leaves_no_tmp() {
        let path = scratch("roundtrip", "fnq");
        save_project(&Project::new("Test Client").with_currency("EUR"), &path).unwrap();

        assert!(!sibling(&path, "tmp").exists());
        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.client_name, "Test Client");
        assert_eq!(loaded.meta.currency, "EUR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_lock_blocks_second_holder() {
        let path = scratch("lock", "fnq");
        save_project(&Project::new("Client"), &path).unwrap();

        let lock = FileLock::acquire(&path, "alice").unwrap();
        assert_eq!(lock.project_path(), path.as_path());
        assert_eq!(FileLock::check(&path).map(|info| info.user), Some("alice".to_string()));

        let err = FileLock::acquire(&path, "bob").unwrap_err();
        assert_eq!(err.error_code(), "FILE_LOCKED");

        drop(lock);
        assert!(!sibling(&path, "lock").exists());
        assert!(FileLock::check(&path).is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_old_lock_is_stale() {
        let mut info = LockInfo::for_current_process("alice");
        assert!(!info.is_stale());
        info.locked_at = Utc::now() - Duration::hours(MAX_LOCK_AGE_HOURS + 1);
        assert!(info.is_stale());
    }

    #[test]
    fn test_failed_takeover_keeps_holder_metadata() {
        let path = scratch("contended", "fnq");
        let lock_path = sibling(&path, "lock");
        let holder = FileLock::acquire(&path, "alice").unwrap();

        // Metadata looks stale but alice still holds the OS lock
        let mut aged = holder.info.clone();
        aged.locked_at = Utc::now() - Duration::hours(MAX_LOCK_AGE_HOURS + 1);
        fs::write(&lock_path, to_json(&aged).unwrap()).unwrap();

        let err = FileLock::acquire(&path, "bob").unwrap_err();
        assert_eq!(err.error_code(), "FILE_LOCKED");
        match err {
            CalcError::FileLocked { locked_by, .. } => assert!(locked_by.starts_with("alice")),
            other => panic!("unexpected error {:?}", other),
        }

        let on_disk: LockInfo = serde_json::from_str(&fs::read_to_string(&lock_path).unwrap()).unwrap();
        assert_eq!(on_disk, aged);

        drop(holder);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_stale_lock_is_taken_over() {
        let path = scratch("stale", "fnq");
        let mut old = LockInfo::for_current_process("alice");
        old.locked_at = Utc::now() - Duration::hours(48);
        fs::write(sibling(&path, "lock"), to_json(&old).unwrap()).unwrap();

        let lock = FileLock::acquire(&path, "bob").unwrap();
        assert_eq!(lock.info.user, "bob");
        drop(lock);
    }

    #[test]
    fn test_catalog_roundtrip() {
        let path = scratch("catalog", "json");
        let catalog = sample_catalog();
        save_catalog(&catalog, &path).unwrap();
        assert_eq!(load_catalog(&path).unwrap(), catalog);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_settings_partial_and_invalid() {
        let path = scratch("settings", "json");
        fs::write(&path, r#"{ "labor_ratio": 0.15 }"#).unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.labor_ratio, 0.15);
        assert_eq!(settings.margin_percent, 30.0);

        fs::write(&path, r#"{ "sash_inset_factor": 0.0 }"#).unwrap();
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "INVALID_SETTINGS");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let err = load_catalog(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");

        let path = scratch("malformed", "json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_catalog(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_schema_version_compatibility() {
        assert!(check_schema_version(SCHEMA_VERSION).is_ok());
        assert!(check_schema_version("0.1.5").is_ok());
        assert!(check_schema_version("0.0.9").is_ok());
        assert!(check_schema_version("0.2.0").is_err());
        assert!(check_schema_version("1.0.0").is_err());
        assert!(check_schema_version("garbage").is_err());
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = scratch("lock_check", "fnq");
        save_project(&Project::new("Client"), &path).unwrap();

        let (loaded, holder) = load_project_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.client_name, "Client");
        assert!(holder.is_none());

        let _ = fs::remove_file(&path);
    }
}
