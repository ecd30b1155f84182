use crate::areas::git::{GitCli, VersionControl};
use crate::areas::provider::ContentProvider;
use crate::areas::workspace::Workspace;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Directory, relative to the repository root, receiving the generated files
pub const DEFAULT_OUTPUT_DIR: &str = "doc";

/// Remote and branch to push to after every commit
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PushTarget {
    remote: String,
    branch: String,
}

impl PushTarget {
    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }
}

/// Working tree the synthetic history is written into
///
/// Bundles the output workspace with the version-control and content
/// collaborators. Commands are implemented as `impl Repository` blocks under
/// `commands::porcelain`.
pub struct Repository<V, P> {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    vcs: V,
    provider: P,
    push_target: Option<PushTarget>,
}

impl<P: ContentProvider> Repository<GitCli, P> {
    /// Repository backed by the `git` executable
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>, provider: P) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let vcs = GitCli::new(path.clone().into_boxed_path());

        Repository::new(&path, writer, vcs, provider)
    }
}

impl<V: VersionControl, P: ContentProvider> Repository<V, P> {
    pub fn new(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        vcs: V,
        provider: P,
    ) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        let workspace = Workspace::new(path.join(DEFAULT_OUTPUT_DIR).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
            vcs,
            provider,
            push_target: None,
        })
    }

    /// Write generated files below `output_dir` (relative paths are resolved
    /// against the repository root)
    pub fn with_output_dir(mut self, output_dir: &Path) -> Self {
        self.workspace = Workspace::new(self.path.join(output_dir).into_boxed_path());
        self
    }

    pub fn with_push_target(mut self, push_target: Option<PushTarget>) -> Self {
        self.push_target = push_target;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn push_target(&self) -> Option<&PushTarget> {
        self.push_target.as_ref()
    }

    /// Path as handed to git: relative to the repository root when possible
    pub fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.path)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
