//! MacroCal MCP Server Implementation
//!
//! Implements the MCP server with the calculation, reference, and status
//! tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::tools::calculate;
use crate::tools::status::{StatusTracker, MACRO_INSTRUCTIONS};

/// MacroCal MCP Service
#[derive(Clone)]
pub struct MacroCalService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<MacroCalService>,
}

impl MacroCalService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for MacroCalService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMacrosParams {
    /// Biological gender for the BMR formula: "male" or "female"
    pub gender: String,
    /// Age in years (15-100)
    pub age: f64,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Weight in kilograms (30-200)
    pub weight_kg: f64,
    /// Activity level: sedentary, light, moderate, heavy, or athlete
    pub activity_level: String,
    /// Goal: loss, maintenance, or gain
    pub goal: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MacroCalService {
    #[tool(
        description = "Calculate daily calorie targets (BMR, TDEE, target calories) and a protein/fat/carb gram split from biometrics. Inputs are validated; call list_profile_options for the accepted values."
    )]
    async fn calculate_macros(
        &self,
        Parameters(p): Parameters<CalculateMacrosParams>,
    ) -> Result<CallToolResult, McpError> {
        let input = calculate::parse_input(
            &p.gender,
            p.age,
            p.height_cm,
            p.weight_kg,
            &p.activity_level,
            &p.goal,
        )
        .map_err(|e| {
            tracing::warn!("Rejected calculation input: {}", e);
            McpError::invalid_params(e.to_string(), None)
        })?;

        let response = calculate::calculate(input);
        tracing::info!(
            "Calculation served: target {} kcal/day",
            response.target_calories
        );
        self.status_tracker.lock().await.record_calculation();

        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(
        description = "List the accepted gender, activity level, and goal identifiers with their descriptions, TDEE multipliers, calorie adjustments, and valid numeric ranges"
    )]
    fn list_profile_options(&self) -> Result<CallToolResult, McpError> {
        let options = calculate::profile_options();
        let json = serde_json::to_string_pretty(&options)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(
        description = "Get instructions for collecting biometric input and presenting macro results. Call this when starting a macro calculation session."
    )]
    fn macro_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            MACRO_INSTRUCTIONS,
        )]))
    }

    #[tool(
        description = "Get the current status of the MacroCal service including build info, process information, and calculations served"
    )]
    async fn macrocal_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MacroCalService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "macrocal".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("MacroCal".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "MacroCal - daily energy and macronutrient estimation. \
                 Call macro_instructions before the first calculation. \
                 calculate_macros computes BMR, TDEE, target calories, and a \
                 protein/fat/carb split from gender, age, height, weight, \
                 activity level, and goal. list_profile_options enumerates \
                 accepted identifiers and ranges. Nothing is persisted; each \
                 calculation stands alone."
                    .into(),
            ),
        }
    }
}
