use std::fs;
use std::path::{Path, PathBuf};

use leftovers::{
    BundleEntry, Category, DeletionMode, DeletionPlanner, DeletionResult, ScanConfig, Scanner,
    Selection, execute,
};
use tempfile::TempDir;

struct Fixture {
    _tmp: TempDir,
    home: PathBuf,
    system: PathBuf,
    bundle: BundleEntry,
}

impl Fixture {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let home = tmp.path().join("home");
        let system = tmp.path().join("system");
        let apps = tmp.path().join("Applications");
        fs::create_dir_all(apps.join("TestApp.app/Contents")).unwrap();
        fs::create_dir_all(&home).unwrap();
        fs::create_dir_all(&system).unwrap();

        Self {
            home,
            system,
            bundle: BundleEntry {
                name: "TestApp".to_string(),
                path: apps.join("TestApp.app"),
            },
            _tmp: tmp,
        }
    }

    fn scanner(&self) -> Scanner {
        let config = ScanConfig::new(&self.home).with_system_root(&self.system);
        Scanner::new(config, Box::new(|_: &Path| Some("com.test.app".to_string())))
    }

    fn file(&self, rel: &str) -> PathBuf {
        let path = self.home.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"data").unwrap();
        path
    }

    fn dir(&self, rel: &str) -> PathBuf {
        let path = self.home.join(rel);
        fs::create_dir_all(path.join("nested")).unwrap();
        path
    }

    fn system_file(&self, rel: &str) -> PathBuf {
        let path = self.system.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"data").unwrap();
        path
    }
}

#[test]
fn scenario_preferences_support_and_caches() {
    let fx = Fixture::new();
    let plist = fx.file("Library/Preferences/com.test.app.plist");
    let support = fx.dir("Library/Application Support/com.test.app");
    let caches = fx.dir("Library/Caches/com.test.app");

    let (identity, record) = fx.scanner().scan_bundle(&fx.bundle);

    assert_eq!(identity.identifier(), "com.test.app");
    assert_eq!(record.get(Category::Preferences), &[plist]);
    assert_eq!(record.get(Category::ApplicationSupport), &[support]);
    assert_eq!(record.get(Category::Caches), &[caches]);
    for category in Category::ALL {
        if !matches!(
            category,
            Category::Preferences | Category::ApplicationSupport | Category::Caches
        ) {
            assert!(record.get(category).is_empty(), "{category} should be empty");
        }
    }
}

#[test]
fn every_category_is_populated_when_planted() {
    let fx = Fixture::new();
    fx.file("Library/Preferences/com.test.app.plist");
    fx.dir("Library/Application Support/com.test.app");
    fx.dir("Library/Application Support/TestApp");
    fx.dir("Library/Caches/com.test.app");
    fx.dir("Library/Logs/com.test.app");
    fx.dir("Library/Saved Application State/com.test.app.savedState");
    fx.dir("Library/Containers/com.test.app");
    fx.dir("Library/PreferencePanes/TestApp.prefPane");
    fx.file("Library/LaunchAgents/com.test.app.agent.plist");
    fx.dir("Library/QuickLook/TestApp.qlgenerator");
    fx.dir("Library/Screen Savers/TestApp.saver");
    fx.dir("Library/Input Methods/TestApp Input.app");
    fx.file("Library/Fonts/TestApp-Regular.ttf");
    fx.system_file("Library/LaunchDaemons/com.test.app.helper.plist");
    fx.system_file("Library/Fonts/TestApp-Bold.ttf");

    let (_, record) = fx.scanner().scan_bundle(&fx.bundle);

    for category in Category::ALL {
        assert!(!record.get(category).is_empty(), "{category} is empty");
    }
    assert_eq!(record.get(Category::StartupItems).len(), 2);
    assert_eq!(record.get(Category::Fonts).len(), 2);
    assert_eq!(record.get(Category::ApplicationSupport).len(), 2);
}

#[test]
fn fallback_identifier_drives_direct_paths() {
    let fx = Fixture::new();
    let caches = fx.dir("Library/Caches/TestApp");
    let config = ScanConfig::new(&fx.home).with_system_root(&fx.system);
    let scanner = Scanner::new(config, Box::new(|_: &Path| None));

    let (identity, record) = scanner.scan_bundle(&fx.bundle);

    assert!(identity.is_fallback());
    // Found by the direct path and again by the name listing, kept once
    assert_eq!(record.get(Category::Caches), &[caches]);
}

#[test]
fn dry_run_then_execute() {
    let fx = Fixture::new();
    let plist = fx.file("Library/Preferences/com.test.app.plist");
    let caches = fx.dir("Library/Caches/com.test.app");

    let (identity, record) = fx.scanner().scan_bundle(&fx.bundle);

    let dry = DeletionPlanner::new(true).plan(&identity.bundle_path, &record, Selection::All);
    let dry_outcomes = execute(&dry);
    assert_eq!(dry_outcomes.len(), 3);
    assert!(
        dry_outcomes
            .iter()
            .all(|o| o.result == DeletionResult::WouldDelete)
    );
    assert!(fx.bundle.path.exists());
    assert!(plist.exists());
    assert!(caches.exists());

    let real: Vec<_> = dry
        .iter()
        .cloned()
        .map(|mut a| {
            a.mode = DeletionMode::Execute;
            a
        })
        .collect();
    let outcomes = execute(&real);

    assert!(outcomes.iter().all(|o| o.result == DeletionResult::Deleted));
    assert!(!fx.bundle.path.exists());
    assert!(!plist.exists());
    assert!(!caches.exists());
}

#[test]
fn bundle_first_and_declined_items_survive() {
    let fx = Fixture::new();
    let plist = fx.file("Library/Preferences/com.test.app.plist");
    let caches = fx.dir("Library/Caches/com.test.app");

    let (identity, record) = fx.scanner().scan_bundle(&fx.bundle);
    let actions = DeletionPlanner::new(false).plan(
        &identity.bundle_path,
        &record,
        Selection::per_item(|path| path.ends_with("com.test.app.plist")),
    );

    assert_eq!(actions[0].path, fx.bundle.path);
    let outcomes = execute(&actions);

    assert_eq!(outcomes.len(), 2);
    assert!(!plist.exists());
    assert!(caches.exists());
}
