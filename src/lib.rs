#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
use pyo3::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod args;
mod ast;
mod builder;
pub mod compiler;
pub mod config;
pub mod error;
pub mod ids;
mod parser;
mod postprocess;
pub mod refresh;
pub mod types;

pub use compiler::{CompileOptions, IdStrategy, NarrativeCompiler};
pub use config::{StoryConfig, TriggerMap};
pub use error::NarrativeError;
pub use refresh::NarrativeFeed;
pub use types::{
    Align, CardNode, ComponentNode, ContentNode, Diagnostic, DiagnosticKind, ImageNode,
    NarrativeOutput, TextNode, TitleNode,
};

/// Parse a narrative document. Total over all inputs; cards come back aligned
/// but without triggers.
pub fn parse(text: &str) -> Vec<ContentNode> {
    parse_with_diagnostics(text).items
}

/// Like [`parse`], also returning non-fatal warnings.
pub fn parse_with_diagnostics(text: &str) -> NarrativeOutput {
    NarrativeCompiler::new().compile(&parser::parse(text))
}

/// Attach triggers to cards. Never adds, drops or reorders nodes.
pub fn resolve_triggers(mut nodes: Vec<ContentNode>, mapping: &TriggerMap) -> Vec<ContentNode> {
    postprocess::apply_triggers(&mut nodes, mapping);
    nodes
}

/// Parse and resolve triggers in one go.
pub fn compile_narrative(text: &str, mapping: &TriggerMap) -> NarrativeOutput {
    let mut output = parse_with_diagnostics(text);
    postprocess::apply_triggers(&mut output.items, mapping);
    output
}

fn to_json(output: &NarrativeOutput) -> Result<String, NarrativeError> {
    serde_json::to_string_pretty(output).map_err(NarrativeError::Output)
}

/// Compile to pretty JSON, resolving triggers from a story config document.
pub fn compile_with_story_config(
    text: &str,
    story_config: &str,
) -> Result<String, NarrativeError> {
    let mapping = StoryConfig::from_json(story_config)?.trigger_map();
    to_json(&compile_narrative(text, &mapping))
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pyfunction]
#[pyo3(signature = (text, story_config=None))]
fn compile_text(text: String, story_config: Option<String>) -> PyResult<String> {
    let result = match story_config {
        Some(cfg) => compile_with_story_config(&text, &cfg),
        None => to_json(&compile_narrative(&text, &TriggerMap::new())),
    };
    result.map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn compile_text_wasm(text: &str) -> Result<String, JsValue> {
    to_json(&compile_narrative(text, &TriggerMap::new()))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn compile_text_with_config_wasm(text: &str, story_config_json: &str) -> Result<String, JsValue> {
    compile_with_story_config(text, story_config_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn compile_text_with_triggers_wasm(
    text: &str,
    trigger_map_json: &str,
) -> Result<String, JsValue> {
    let mapping =
        config::trigger_map_from_json(trigger_map_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&compile_narrative(text, &mapping)).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pymodule]
fn narrative_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compile_text, m)?)?;
    Ok(())
}
