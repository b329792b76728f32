//! One-call evaluation of expression text.

use log::{debug, info};

use bitexpr_ast::Expression;
use bitexpr_number::{Number, Result};
use bitexpr_parser::TreeBuilder;

use crate::config::EngineConfig;
use crate::evaluator::Evaluator;

/// An expression, a tree builder, and the settings to evaluate with.
///
/// The engine reuses its expression and builder allocations across calls.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    expr: Expression,
    builder: TreeBuilder,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        info!("engine ready: {config:?}");
        Ok(Self {
            config,
            expr: Expression::with_capacity(config.capacity)?,
            builder: TreeBuilder::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The expression left by the last call, built if evaluation got that far.
    pub fn expression(&self) -> &Expression {
        &self.expr
    }

    /// Lexes, builds, and evaluates `text`.
    pub fn evaluate_str(&mut self, text: &str) -> Result<Number> {
        self.expr.set_from_str(text)?;
        debug!("evaluating {} tokens", self.expr.len());
        Evaluator::new(self.config.size_mode, self.config.signedness)
            .evaluate(&mut self.builder, &mut self.expr)
    }
}
