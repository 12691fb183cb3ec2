use ::std::io::{Read, Write};
use serde::{Deserialize, Serialize};
use rmp_serde::{Deserializer, Serializer};
use flate2::{Compression, read::GzDecoder, write::GzEncoder};
use thiserror::Error;
use common_types::Quiz::QuizOptions;

pub mod checker;
pub mod engine;
pub mod formatter;
pub mod helper;
pub mod question;
pub mod quizset;
pub mod solver;

pub use quizset::QuizSet;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("internal generation failure: {0}")]
    InternalGenerationFailure(#[from] engine::GenerateFailure),
    #[error("failed to serialize quiz set")]
    SerializeError(#[from] rmp_serde::encode::Error),
    #[error("failed to deserialize quiz set")]
    DeserializeError(#[from] rmp_serde::decode::Error),
    #[error("compression error: {0}")]
    CompressionError(#[from] ::std::io::Error),
}

/// Builds a populated quiz set with the thread-local generator.
#[tracing::instrument(skip_all, fields(kind = %options.kind, tier = ?options.equation_tier))]
pub fn generate(options: QuizOptions) -> Result<QuizSet, GenerationError> {
    let mut quizset = QuizSet::new(options);
    let population_result = quizset.populate(&mut rand::thread_rng());

    match population_result {
        Ok(()) => (),
        Err(failure) => {
            tracing::error!("Failed to generate due to {:?}", failure);
            return Err(GenerationError::InternalGenerationFailure(failure));
        },
    }
    tracing::info!("Generated {} questions for session {}", quizset.questions().len(), quizset.session_id());
    Ok(quizset)
}

/// MessagePack, gzip compressed.
pub fn export<W: Write>(quizset: &QuizSet, writer: W) -> Result<(), GenerationError> {
    let mut serialize_buf = Vec::new();
    quizset.serialize(&mut Serializer::new(&mut serialize_buf))?;

    let mut encoder = GzEncoder::new(writer, Compression::default());
    if let Err(err) = encoder.write_all(&serialize_buf) {
        tracing::error!("Failed to write to compression buffer due to: {err}");
        return Err(GenerationError::CompressionError(err));
    }
    encoder.finish()?;
    Ok(())
}

pub fn import<R: Read>(reader: R) -> Result<QuizSet, GenerationError> {
    let mut decoder = GzDecoder::new(reader);
    let mut buf = Vec::new();
    if let Err(err) = decoder.read_to_end(&mut buf) {
        tracing::error!("Failed to decompress quiz set due to: {err}");
        return Err(GenerationError::CompressionError(err));
    }
    let quizset = QuizSet::deserialize(&mut Deserializer::new(&buf[..]))?;
    tracing::info!(
        "Imported session {} ({} mode) created on {}",
        quizset.session_id(),
        quizset.options().kind,
        quizset.created_on(),
    );
    Ok(quizset)
}
