use minijinja::{Environment, context};

use apib_core::GeneratedFile;
use apib_core::ir::GroupDefinition;

use super::action_context;
use crate::generator::SpringConfig;

/// Emit `controller/<Group>Controller.java`: a `@RestController` delegating
/// every action to the group's service.
pub fn emit_controller(
    env: &Environment<'_>,
    group: &GroupDefinition,
    config: &SpringConfig,
) -> Result<GeneratedFile, minijinja::Error> {
    let tmpl = env.get_template("controller.java.j2")?;
    let actions: Vec<minijinja::Value> = group
        .resources
        .iter()
        .flat_map(|resource| &resource.actions)
        .map(action_context)
        .collect();

    let content = tmpl.render(context! {
        config => config,
        group => group,
        actions => actions,
    })?;

    Ok(GeneratedFile {
        path: format!("controller/{}.java", group.controller_class_name),
        content,
    })
}
