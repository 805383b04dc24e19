use serde::Serialize;

use apib_core::ir::ApiModel;
use apib_core::{CodeGenerator, GeneratedFile};

use crate::emitters;
use crate::error::GeneratorError;

/// Values stamped into every generated source file.
#[derive(Debug, Clone, Serialize)]
pub struct SpringConfig {
    /// Java package prefix; files land in `<package>.controller`, `.service` and `.model`.
    pub package: String,
    pub extra_imports: Vec<String>,
    /// Name of the blueprint the sources were generated from.
    pub source_file_name: String,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            package: "api".to_string(),
            extra_imports: Vec::new(),
            source_file_name: "api.json".to_string(),
        }
    }
}

/// Spring MVC controller, service and model generator.
pub struct SpringMvcGenerator;

impl CodeGenerator for SpringMvcGenerator {
    type Config = SpringConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        model: &ApiModel,
        config: &SpringConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let env = emitters::environment()?;
        let mut files = Vec::new();

        for group in &model.groups {
            files.push(emitters::controllers::emit_controller(&env, group, config)?);
            files.push(emitters::services::emit_service(&env, group, config)?);
        }

        for definition in &model.models {
            files.push(emitters::models::emit_model(&env, definition, config)?);
        }

        log::debug!("rendered {} files", files.len());
        Ok(files)
    }
}
