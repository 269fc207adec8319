//! Shared helpers for vend CLI specs
//!
//! Every spec runs the real binary inside a temp directory and asserts
//! through the fluent `Project` / `Vend` / `Checked` chain.

use predicates::prelude::*;

/// Temp directory a spec runs the binary in
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Project {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write file");
    }

    /// Command builder for the vend binary, rooted in this project
    pub fn vend(&self) -> Vend {
        let mut cmd = assert_cmd::Command::cargo_bin("vend").expect("vend binary");
        cmd.current_dir(self.dir.path());
        Vend { cmd }
    }
}

pub struct Vend {
    cmd: assert_cmd::Command,
}

impl Vend {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Run and require exit success
    pub fn passes(mut self) -> Checked {
        Checked {
            assert: self.cmd.assert().success(),
        }
    }

    /// Run and require a non-zero exit
    pub fn fails(mut self) -> Checked {
        Checked {
            assert: self.cmd.assert().failure(),
        }
    }
}

pub struct Checked {
    assert: assert_cmd::assert::Assert,
}

impl Checked {
    pub fn stdout_has(self, needle: &str) -> Self {
        Checked {
            assert: self.assert.stdout(predicate::str::contains(needle)),
        }
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        Checked {
            assert: self.assert.stdout(predicate::str::contains(needle).not()),
        }
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Checked {
            assert: self.assert.stderr(predicate::str::contains(needle)),
        }
    }

    #[allow(dead_code)]
    pub fn stderr_lacks(self, needle: &str) -> Self {
        Checked {
            assert: self.assert.stderr(predicate::str::contains(needle).not()),
        }
    }

    /// Captured stdout, for asserts the fluent chain cannot express
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stdout).into_owned()
    }
}
