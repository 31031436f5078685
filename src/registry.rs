//! Tool registry.
//!
//! Each toolbox utility implements [`Tool`] and is registered under a
//! stable key at startup; callers dispatch by key instead of branching on
//! tool identifiers inline.

use crate::error::ToolError;
use crate::output;
use crate::processing::{calculate_cidr_split, calculate_subnet, project_grid};
use serde_json::Value;
use std::collections::HashMap;

/// A single toolbox utility with a uniform execute capability.
pub trait Tool: Send + Sync {
    /// Stable identifier used for dispatch.
    fn key(&self) -> &'static str;

    /// One-line description for usage listings.
    fn describe(&self) -> &'static str;

    /// Run the tool on raw input text, producing its JSON result.
    fn execute(&self, input: &str) -> Result<Value, ToolError>;

    /// Human-readable rendering. Defaults to pretty JSON.
    fn render(&self, input: &str) -> Result<String, ToolError> {
        let value = self.execute(input)?;
        Ok(output::json::to_pretty(&value))
    }
}

struct SubnetTool;

impl Tool for SubnetTool {
    fn key(&self) -> &'static str {
        "subnet"
    }
    fn describe(&self) -> &'static str {
        "network, broadcast, mask and host facts for an address or CIDR"
    }
    fn execute(&self, input: &str) -> Result<Value, ToolError> {
        Ok(output::json::to_value(&calculate_subnet(input)?))
    }
    fn render(&self, input: &str) -> Result<String, ToolError> {
        Ok(output::terminal::subnet_report(&calculate_subnet(input)?))
    }
}

struct CidrSplitTool;

impl Tool for CidrSplitTool {
    fn key(&self) -> &'static str {
        "cidr-split"
    }
    fn describe(&self) -> &'static str {
        "bisect a CIDR block into its two child subnets"
    }
    fn execute(&self, input: &str) -> Result<Value, ToolError> {
        Ok(output::json::to_value(&calculate_cidr_split(input)?))
    }
    fn render(&self, input: &str) -> Result<String, ToolError> {
        Ok(output::terminal::split_report(&calculate_cidr_split(input)?))
    }
}

struct SubnetGridTool;

impl Tool for SubnetGridTool {
    fn key(&self) -> &'static str {
        "subnet-grid"
    }
    fn describe(&self) -> &'static str {
        "256-cell address grid for an address or CIDR"
    }
    fn execute(&self, input: &str) -> Result<Value, ToolError> {
        let projection = project_grid(&calculate_subnet(input)?);
        Ok(output::json::to_value(&projection))
    }
    fn render(&self, input: &str) -> Result<String, ToolError> {
        let projection = project_grid(&calculate_subnet(input)?);
        Ok(output::terminal::grid_view(&projection))
    }
}

/// Key-to-handler map populated once at startup.
pub struct ToolRegistry {
    tools: HashMap<&'static str, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Registry with every built-in tool registered.
    pub fn with_builtin_tools() -> ToolRegistry {
        let mut registry = ToolRegistry {
            tools: HashMap::new(),
        };
        registry.register(Box::new(SubnetTool));
        registry.register(Box::new(CidrSplitTool));
        registry.register(Box::new(SubnetGridTool));
        registry
    }

    /// Register a tool under its own key, replacing any previous handler.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.key(), tool);
    }

    pub fn get(&self, key: &str) -> Result<&dyn Tool, ToolError> {
        self.tools
            .get(key)
            .map(|tool| tool.as_ref())
            .ok_or_else(|| ToolError::UnknownTool(key.to_string()))
    }

    /// Dispatch to a tool's JSON execution.
    pub fn execute(&self, key: &str, input: &str) -> Result<Value, ToolError> {
        log::info!("execute tool={key} input={input}");
        self.get(key)?.execute(input)
    }

    /// Dispatch to a tool's human rendering.
    pub fn render(&self, key: &str, input: &str) -> Result<String, ToolError> {
        self.get(key)?.render(input)
    }

    /// `(key, description)` pairs for usage listings, sorted by key.
    pub fn usage(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self
            .tools
            .values()
            .map(|tool| (tool.key(), tool.describe()))
            .collect();
        entries.sort();
        entries
    }
}
