use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;

/// A pair of freshly created comparison roots.
#[fixture]
pub fn tree_pair() -> (TempDir, TempDir) {
    (
        TempDir::new().expect("Failed to create first tree root"),
        TempDir::new().expect("Failed to create second tree root"),
    )
}

pub fn run_dirdiff_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("dirdiff").expect("Failed to find dirdiff binary");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
