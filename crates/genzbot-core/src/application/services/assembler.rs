//! Plan the on-disk layout of a generated project.
//!
//! [`assemble`] turns two resolved profiles into a [`ProjectStructure`]:
//! the four fixed directories first, then every artifact. `.env` and
//! `requirements.txt` are planned empty; [`customize`] plans their real
//! content as a second pass over the same paths.

use std::path::Path;

use crate::domain::{
    BackendProfile, ConfigValidator, DomainError, FileContent, ProjectStructure, TemplateProfile,
    layout,
};

/// Plan directories and files for one generation pass.
pub fn assemble(
    backend: &BackendProfile,
    template: &TemplateProfile,
    bot_name: &str,
    root: &Path,
) -> Result<ProjectStructure, DomainError> {
    let mut structure = ProjectStructure::new(root);

    for dir in layout::DIRECTORIES {
        structure.add_directory(dir);
    }

    structure.add_file(
        layout::RESPONSE_WRAPPER,
        FileContent::Text(backend.response_wrapper_source.clone()),
    );
    structure.add_file(
        layout::SERVICE_ENTRY,
        FileContent::Text(backend.service_source.clone()),
    );
    structure.add_file(layout::STYLESHEET, FileContent::Text(template.style()));
    structure.add_file(layout::SCRIPT, FileContent::Text(template.script()));
    structure.add_file(layout::MARKUP, FileContent::Text(template.markup(bot_name)));

    if let Some(asset) = &template.auxiliary_asset {
        structure.add_file(
            Path::new(layout::STATIC_DIR).join(asset.id.file_name),
            FileContent::Binary(asset.bytes.clone()),
        );
    }

    // Filled in by `customize`.
    structure.add_file(layout::ENV_FILE, FileContent::Text(String::new()));
    structure.add_file(layout::MANIFEST, FileContent::Text(String::new()));

    ConfigValidator::validate_project_structure(&structure)?;
    Ok(structure)
}

/// Plan the credential file and dependency manifest for `backend`.
///
/// Returns a files-only structure rooted at `root`; its paths overwrite the
/// placeholders written by [`assemble`].
pub fn customize(backend: &BackendProfile, credential: &str, root: &Path) -> ProjectStructure {
    ProjectStructure::new(root)
        .with_file(layout::ENV_FILE, FileContent::Text(backend.env_file(credential)))
        .with_file(layout::MANIFEST, FileContent::Text(backend.requirements()))
}
