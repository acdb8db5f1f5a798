//! Editor completions sourced from the engine.
//!
//! Keywords come from the parser dialect bundled with the engine; function
//! names come from the live session state, so UDFs a host registers show up
//! alongside the built-ins.

use datafusion::prelude::SessionContext;
use datafusion::sql::sqlparser::keywords::ALL_KEYWORDS;
use sqlpane_adapter::Completion;

const KEYWORD_PRIORITY: u32 = 100;
const FUNCTION_PRIORITY: u32 = 1000;

/// Keyword and function completions for the session, sorted by label.
pub(crate) fn engine_completions(ctx: &SessionContext) -> Vec<Completion> {
    let state = ctx.state();
    let mut items: Vec<Completion> = Vec::new();
    for keyword in ALL_KEYWORDS {
        items.push(Completion::new(*keyword, "kw", *keyword, KEYWORD_PRIORITY));
    }
    for name in state.scalar_functions().keys() {
        items.push(Completion::new(name.clone(), "fn", name.clone(), FUNCTION_PRIORITY));
    }
    for name in state.aggregate_functions().keys() {
        items.push(Completion::new(name.clone(), "agg", name.clone(), FUNCTION_PRIORITY));
    }
    for name in state.window_functions().keys() {
        items.push(Completion::new(name.clone(), "win", name.clone(), FUNCTION_PRIORITY));
    }
    items.sort_by(|a, b| a.label.cmp(&b.label));
    items
}
