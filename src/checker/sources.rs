use std::path::{Path, PathBuf};

use crate::config::{FileSystem, PolicyConfig, SourcesConfig, read_file};
use crate::error::Result;
use crate::extract::{
    ConfigEnvVars, DeployScriptExtractor, DeployScriptVars, LabelExtraction, LabelExtractor,
    TemplateRefExtractor, TemplateRefs, WorkflowEnv, extract_workflow_env, parse_config_env,
};

use super::rules::SourceNames;

const TEMPLATE_SUFFIX: &str = ".template";

/// Concrete files to read, after applying the `.template` fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub dockerfile: PathBuf,
    pub deploy_script: PathBuf,
    pub workflow: PathBuf,
    pub app_config: PathBuf,
    pub config_env: PathBuf,
    /// The app config file was missing and its `.template` sibling was used.
    pub app_config_fallback: bool,
}

impl SourcePaths {
    /// Resolve configured paths against `root`.
    ///
    /// The app config and config env files fall back to their `.template`
    /// sibling when the processed file does not exist.
    #[must_use]
    pub fn resolve<F: FileSystem>(fs: &F, root: &Path, sources: &SourcesConfig) -> Self {
        let (app_config, app_config_fallback) =
            with_template_fallback(fs, &root.join(&sources.app_config));
        let (config_env, _) = with_template_fallback(fs, &root.join(&sources.config_env));
        Self {
            dockerfile: root.join(&sources.dockerfile),
            deploy_script: root.join(&sources.deploy_script),
            workflow: root.join(&sources.workflow),
            app_config,
            config_env,
            app_config_fallback,
        }
    }

    /// Whether the app config resolved to its unprocessed template.
    #[must_use]
    pub const fn uses_templates(&self) -> bool {
        self.app_config_fallback
    }

    #[must_use]
    pub fn names(&self) -> SourceNames {
        SourceNames {
            deploy_script: display_name(&self.deploy_script),
            app_config: display_name(&self.app_config),
            config_env: display_name(&self.config_env),
        }
    }
}

/// Returns the path to read and whether the `.template` sibling was chosen.
fn with_template_fallback<F: FileSystem>(fs: &F, path: &Path) -> (PathBuf, bool) {
    if fs.exists(path) {
        return (path.to_path_buf(), false);
    }
    let mut template = path.as_os_str().to_owned();
    template.push(TEMPLATE_SUFFIX);
    let template = PathBuf::from(template);
    tracing::debug!(path = %template.display(), "processed file missing, using template");
    (template, true)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Everything extracted from the five artifacts for one run.
#[derive(Debug, Clone)]
pub struct Sources {
    pub paths: SourcePaths,
    pub labels: LabelExtraction,
    pub deploy_script: DeployScriptVars,
    pub workflow_env: WorkflowEnv,
    pub template_refs: TemplateRefs,
    pub config_env: ConfigEnvVars,
}

impl Sources {
    /// Read and extract every artifact, one file at a time.
    ///
    /// # Errors
    /// Returns an error if any file is missing or unreadable, or if the
    /// workflow document is malformed. Malformed label JSON is not an error
    /// here; it is recorded in `labels.findings`.
    pub fn load<F: FileSystem>(
        fs: &F,
        root: &Path,
        sources: &SourcesConfig,
        policy: &PolicyConfig,
    ) -> Result<Self> {
        let paths = SourcePaths::resolve(fs, root, sources);

        let labels = LabelExtractor::new().extract(&read_file(fs, &paths.dockerfile)?);
        let deploy_script =
            DeployScriptExtractor::new().extract(&read_file(fs, &paths.deploy_script)?);
        let workflow_env = extract_workflow_env(&read_file(fs, &paths.workflow)?, &paths.workflow)?;
        let template_refs = TemplateRefExtractor::new(policy.template_refs)
            .extract(&read_file(fs, &paths.app_config)?);
        let config_env = parse_config_env(&read_file(fs, &paths.config_env)?);

        Ok(Self {
            paths,
            labels,
            deploy_script,
            workflow_env,
            template_refs,
            config_env,
        })
    }
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod tests;
