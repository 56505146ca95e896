//! Implementation of the `strata layers` command.

use std::str::FromStr;

use strata_core::domain::{LAYERS, Layer, LayerSpec, spec_for};

use crate::{
    cli::{LayersArgs, LayersFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: LayersArgs, output: OutputManager) -> CliResult<()> {
    let selected = select(args.layer.as_deref())?;

    match args.format {
        LayersFormat::Table => {
            output.header("Module layout (modules/<Name>/...):")?;
            for spec in selected {
                output.print(&format!("  {:<16} {}", spec.name(), spec.children.join(", ")))?;
            }
        }

        LayersFormat::List => {
            for path in relative_paths(selected) {
                output.data(&path)?;
            }
        }

        LayersFormat::Json => match (args.layer, selected) {
            (Some(_), [spec]) => output.json(spec)?,
            _ => output.json(selected)?,
        },
    }

    Ok(())
}

/// Every row of the layout table, or just the one for `layer`.
fn select(layer: Option<&str>) -> CliResult<&'static [LayerSpec]> {
    let Some(name) = layer else {
        return Ok(&LAYERS);
    };
    let layer = Layer::from_str(name).map_err(|e| CliError::Core(e.into()))?;
    Ok(std::slice::from_ref(spec_for(layer)))
}

/// Layer roots and children, relative to the module root, in creation order.
fn relative_paths(layers: &[LayerSpec]) -> Vec<String> {
    layers
        .iter()
        .flat_map(|spec| {
            std::iter::once(spec.name().to_owned())
                .chain(spec.children.iter().map(|c| format!("{}/{c}", spec.name())))
        })
        .collect()
}
