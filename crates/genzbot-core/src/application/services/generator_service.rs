//! Project Generator - main application orchestrator.
//!
//! This service coordinates one generation pass:
//! 1. Check the credential
//! 2. Resolve backend and template profiles (loading bundled assets)
//! 3. Assemble and validate the project plan
//! 4. Write directories, then files
//! 5. Customize `.env` and `requirements.txt`
//!
//! Steps 1-3 touch nothing on disk. Once step 4 starts a failure leaves the
//! partially written tree in place; nothing is rolled back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    application::{
        ports::{AssetProvider, Filesystem, SourceStore},
        services::{
            assembler::{assemble, customize},
            resolver::{resolve_backend, resolve_template},
        },
    },
    domain::{Backend, FsEntry, GenerationConfig, ProjectStructure, Template},
    error::GenZBotResult,
};

/// Summary of a finished generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// Correlates the log lines of one pass.
    pub run_id: Uuid,
    pub root: PathBuf,
    pub backend: Backend,
    pub template: Template,
    /// Relative paths of every file written, in write order.
    pub files: Vec<PathBuf>,
}

/// Main generation service.
pub struct ProjectGenerator {
    sources: Box<dyn SourceStore>,
    assets: Box<dyn AssetProvider>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectGenerator {
    /// Create a new generator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use genzbot_core::application::{ProjectGenerator, ports::*};
    ///
    /// let generator = ProjectGenerator::new(
    ///     sources,    // impl SourceStore
    ///     assets,     // impl AssetProvider
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        sources: Box<dyn SourceStore>,
        assets: Box<dyn AssetProvider>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            sources,
            assets,
            filesystem,
        }
    }

    /// Generate the project described by `config` into its output directory.
    ///
    /// Regenerating into an existing project overwrites every fixed file.
    #[instrument(
        skip_all,
        fields(
            backend = %config.backend(),
            template = %config.template(),
            output_dir = %config.output_dir().display()
        )
    )]
    pub fn create_project(&self, config: &GenerationConfig) -> GenZBotResult<GeneratedProject> {
        let run_id = Uuid::new_v4();
        info!(%run_id, "Creating project");

        let credential = config.require_credential()?;

        let backend = resolve_backend(config.backend(), config.behavior(), self.sources.as_ref())?;
        let template = resolve_template(
            config.template(),
            self.sources.as_ref(),
            self.assets.as_ref(),
        )?;

        let structure = assemble(&backend, &template, config.bot_name(), config.output_dir())?;
        self.write_structure(&structure)?;
        info!(files = structure.files().count(), "Project files written");

        let customized = customize(&backend, credential, config.output_dir());
        self.write_structure(&customized)?;
        debug!(credential_var = backend.credential_var, "Credential file and manifest customized");

        info!(%run_id, root = %config.output_dir().display(), "Project created");

        Ok(GeneratedProject {
            run_id,
            root: config.output_dir().to_path_buf(),
            backend: config.backend(),
            template: config.template(),
            files: structure.files().map(|f| f.path.clone()).collect(),
        })
    }

    /// Resolve and assemble without writing anything.
    ///
    /// Fails exactly where [`create_project`](Self::create_project) would
    /// fail before its first write. The credential file and manifest are
    /// returned in their customized form.
    #[instrument(skip_all, fields(backend = %config.backend(), template = %config.template()))]
    pub fn plan(&self, config: &GenerationConfig) -> GenZBotResult<ProjectStructure> {
        let credential = config.require_credential()?;

        let backend = resolve_backend(config.backend(), config.behavior(), self.sources.as_ref())?;
        let template = resolve_template(
            config.template(),
            self.sources.as_ref(),
            self.assets.as_ref(),
        )?;

        let assembled = assemble(&backend, &template, config.bot_name(), config.output_dir())?;
        let customized = customize(&backend, credential, config.output_dir());

        let mut plan = ProjectStructure::new(config.output_dir());
        for entry in assembled.entries {
            let replacement = match &entry {
                FsEntry::File(file) => customized.file(&file.path).cloned(),
                FsEntry::Directory(_) => None,
            };
            plan.entries
                .push(replacement.map_or(entry, FsEntry::File));
        }
        Ok(plan)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write every entry of a structure, directories before files.
    fn write_structure(&self, structure: &ProjectStructure) -> GenZBotResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for dir in structure.directories() {
            self.filesystem.create_dir_all(&root.join(&dir.path))?;
        }

        for file in structure.files() {
            let path = root.join(&file.path);
            self.ensure_parent(&path)?;
            self.filesystem.write_file(&path, file.content.as_bytes())?;
            debug!(path = %file.path.display(), size = file.size(), "Wrote file");
        }

        Ok(())
    }

    fn ensure_parent(&self, path: &Path) -> GenZBotResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.filesystem.exists(parent) => {
                self.filesystem.create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockAssetProvider, MockFilesystem, MockSourceStore};
    use crate::domain::{BackendSources, DomainError, TemplateSources, layout};
    use crate::error::GenZBotError;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Mkdir(PathBuf),
        Write(PathBuf, Vec<u8>),
    }

    fn sources() -> MockSourceStore {
        let mut sources = MockSourceStore::new();
        sources.expect_backend_sources().returning(|_| {
            Ok(BackendSources {
                response_wrapper: "model = \"{{MODEL_NAME}}\"".into(),
                service: "app = Flask(__name__)".into(),
            })
        });
        sources.expect_template_sources().returning(|_| {
            Ok(TemplateSources {
                markup: "<title>{{BOT_NAME}}</title>".into(),
                style: "body {}".into(),
                script: "send()".into(),
            })
        });
        sources
    }

    fn image() -> MockAssetProvider {
        let mut assets = MockAssetProvider::new();
        assets
            .expect_load()
            .returning(|_| Ok(Some(b"\x89PNG".to_vec())));
        assets
    }

    fn recording_fs() -> (MockFilesystem, Arc<Mutex<Vec<Op>>>) {
        let ops = Arc::new(Mutex::new(Vec::new()));
        let mut fs = MockFilesystem::new();

        let mkdirs = Arc::clone(&ops);
        fs.expect_create_dir_all().returning(move |p| {
            mkdirs.lock().unwrap().push(Op::Mkdir(p.to_path_buf()));
            Ok(())
        });
        let writes = Arc::clone(&ops);
        fs.expect_write_file().returning(move |p, c| {
            writes
                .lock()
                .unwrap()
                .push(Op::Write(p.to_path_buf(), c.to_vec()));
            Ok(())
        });
        fs.expect_exists().return_const(true);
        (fs, ops)
    }

    /// A filesystem that fails the test if it is touched at all.
    fn untouched_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_exists().return_const(false);
        fs
    }

    fn config(backend: Backend, template: Template) -> GenerationConfig {
        GenerationConfig::builder()
            .backend(backend)
            .template(template)
            .credential("key-123")
            .bot_name("Nova")
            .output_dir("proj")
            .build()
            .unwrap()
    }

    #[test]
    fn creates_project_with_directories_first() {
        let (fs, ops) = recording_fs();
        let generator = ProjectGenerator::new(Box::new(sources()), Box::new(image()), Box::new(fs));

        let project = generator
            .create_project(&config(Backend::OpenAi, Template::Plain))
            .unwrap();

        assert_eq!(project.root, PathBuf::from("proj"));
        assert_eq!(project.files.len(), 7);

        let ops = ops.lock().unwrap();
        let first_write = ops.iter().position(|o| matches!(o, Op::Write(..))).unwrap();
        for dir in layout::DIRECTORIES {
            let mkdir = ops
                .iter()
                .position(|o| *o == Op::Mkdir(Path::new("proj").join(dir)))
                .unwrap();
            assert!(mkdir < first_write, "{dir} created after a file");
        }
    }

    #[test]
    fn env_is_written_empty_then_customized() {
        let (fs, ops) = recording_fs();
        let generator = ProjectGenerator::new(Box::new(sources()), Box::new(image()), Box::new(fs));
        generator
            .create_project(&config(Backend::OpenAi, Template::Plain))
            .unwrap();

        let env_path = Path::new("proj").join(layout::ENV_FILE);
        let env_writes: Vec<_> = ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|o| match o {
                Op::Write(p, c) if *p == env_path => Some(c.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(env_writes.len(), 2);
        assert!(env_writes[0].is_empty());
        assert_eq!(env_writes[1], b"OPENAI_API_KEY=\"key-123\"\n");
    }

    #[test]
    fn missing_credential_fails_before_any_write() {
        let mut sources = MockSourceStore::new();
        sources.expect_backend_sources().never();
        let generator =
            ProjectGenerator::new(Box::new(sources), Box::new(image()), Box::new(untouched_fs()));

        let config = GenerationConfig::builder()
            .backend(Backend::Gemini)
            .build()
            .unwrap();
        let err = generator.create_project(&config).unwrap_err();
        assert_eq!(err, GenZBotError::Domain(DomainError::MissingCredential));
    }

    #[test]
    fn missing_asset_fails_before_any_write() {
        let mut assets = MockAssetProvider::new();
        assets.expect_load().returning(|_| Ok(None));
        assets.expect_searched().returning(|| "nowhere".into());
        let generator =
            ProjectGenerator::new(Box::new(sources()), Box::new(assets), Box::new(untouched_fs()));

        let err = generator
            .create_project(&config(Backend::Gemini, Template::Galaxy))
            .unwrap_err();
        assert!(matches!(
            err,
            GenZBotError::Application(crate::application::ApplicationError::InternalAsset { .. })
        ));
    }

    #[test]
    fn plan_writes_nothing_and_shows_customized_files() {
        let generator =
            ProjectGenerator::new(Box::new(sources()), Box::new(image()), Box::new(untouched_fs()));

        let plan = generator
            .plan(&config(Backend::Llama, Template::Galaxy))
            .unwrap();

        assert_eq!(plan.files().count(), 8);
        let env = plan.file(layout::ENV_FILE).unwrap();
        assert_eq!(env.content.as_text(), Some("LLAMA_API_KEY=\"key-123\"\n"));
        let markup = plan.file(layout::MARKUP).unwrap();
        assert_eq!(markup.content.as_text(), Some("<title>Nova</title>"));
    }
}
