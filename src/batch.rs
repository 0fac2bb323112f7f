//! Batch driver - repeated generation with pre-validated inputs.

use rand::Rng;

#[cfg(feature = "async")]
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::generator::{self, GenerateError, GenerationMode};
use crate::pattern::Pattern;
use crate::pools::Pools;

/// A validated pattern, pool set and mode, ready to generate passwords.
#[derive(Debug, Clone)]
pub struct Generator {
    pattern: Pattern,
    pools: Pools,
    mode: GenerationMode,
}

impl Generator {
    /// Validates the inputs once so that every later call succeeds.
    ///
    /// # Errors
    ///
    /// Same conditions as [`generator::validate`].
    pub fn new(pattern: Pattern, pools: Pools, mode: GenerationMode) -> Result<Self, GenerateError> {
        generator::validate(&pattern, &pools, mode)?;
        Ok(Self {
            pattern,
            pools,
            mode,
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Generates one password.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        generator::render(&self.pattern, &self.pools, self.mode, rng)
            .expect("inputs validated in Generator::new")
    }

    /// Lazy, unbounded sequence of passwords.
    pub fn iter<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> impl Iterator<Item = String> + 'a {
        std::iter::repeat_with(move || self.generate(&mut *rng))
    }

    /// Generates exactly `count` passwords, in order.
    pub fn batch<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        #[cfg(feature = "tracing")]
        tracing::debug!("Generating batch of {} passwords with pattern {}", count, self.pattern);

        let mut passwords = Vec::with_capacity(count);
        passwords.extend(self.iter(rng).take(count));
        passwords
    }
}

/// Validates the inputs and generates `count` passwords.
///
/// `count == 0` yields an empty batch.
pub fn generate_batch<R: Rng + ?Sized>(
    pattern: &Pattern,
    pools: &Pools,
    mode: GenerationMode,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError> {
    let generator = Generator::new(pattern.clone(), pools.clone(), mode)?;
    Ok(generator.batch(count, rng))
}

#[cfg(feature = "async")]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Batch generation cancelled after {sent} passwords")]
    Cancelled { sent: usize },
    #[error("Receiver dropped after {sent} passwords")]
    ChannelClosed { sent: usize },
}

/// Streams `count` passwords through `tx`, one at a time.
///
/// Cancellation is checked before each password. On error the receiver
/// should discard whatever it already received.
///
/// # Arguments
/// * `rng` - Random source; must be `Send` so the future can move between threads
///
/// # Returns
/// The number of passwords sent.
#[cfg(feature = "async")]
pub async fn generate_batch_tx<R: Rng + Send>(
    generator: &Generator,
    count: usize,
    rng: &mut R,
    token: CancellationToken,
    tx: mpsc::Sender<String>,
) -> Result<usize, BatchError> {
    #[cfg(feature = "tracing")]
    tracing::info!("streaming {} passwords...", count);

    for sent in 0..count {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Batch generation cancelled after {} passwords", sent);
            return Err(BatchError::Cancelled { sent });
        }

        let password = generator.generate(&mut *rng);
        if let Err(_e) = tx.send(password).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send generated password: {}", _e);
            return Err(BatchError::ChannelClosed { sent });
        }
    }

    Ok(count)
}
