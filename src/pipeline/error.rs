use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("fresh threshold ({fresh_max}) must not exceed aging threshold ({aging_max})")]
    InvertedThresholds { fresh_max: u32, aging_max: u32 },

    #[error("unknown pipeline stage '{0}'")]
    UnknownStage(String),
}
