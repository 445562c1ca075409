//! Humanized interaction primitives.
//!
//! Randomized delays, multi-step pointer movement chains and scroll
//! bursts, injected between real interactions so automated sessions
//! resemble manual use. All draws happen before the corresponding await
//! (thread RNGs are not `Send`). Suspension is plain sleeps; there is no
//! concurrency here, every primitive runs to completion in the calling
//! flow.

use crate::actions::BrowserActions;
use crate::error::Result;
use rand::Rng;
use std::time::Duration;

/// Pause bounds after each pointer-move step, in seconds.
const STEP_PAUSE: (f64, f64) = (0.5, 1.5);
/// Pause bounds before each scroll burst, in seconds.
const BURST_PAUSE: (f64, f64) = (0.1, 0.8);

/// Sleep for a duration drawn uniformly from `[min_secs, max_secs]`.
pub async fn pause(min_secs: f64, max_secs: f64) {
    let delay = {
        let mut rng = rand::thread_rng();
        rng.gen_range(min_secs..=max_secs)
    };
    tokio::time::sleep(Duration::from_secs_f64(delay)).await;
}

/// Run randomized pointer-movement chains across the viewport.
///
/// Draws a chain count from `[min_chains, max_chains]`, then per chain a
/// step count from `[min_steps, max_steps]`. Each step draws a relative
/// offset within the viewport's width and height, attempts the move, and
/// pauses briefly. A move that would leave the viewport is skipped
/// silently and does not abort the remaining steps; any other driver
/// failure propagates.
pub async fn move_chains<S>(
    session: &mut S,
    min_steps: u32,
    max_steps: u32,
    min_chains: u32,
    max_chains: u32,
) -> Result<()>
where
    S: BrowserActions + Send + ?Sized,
{
    let chains = {
        let mut rng = rand::thread_rng();
        rng.gen_range(min_chains..=max_chains)
    };
    tracing::trace!("running {} pointer chains", chains);

    for _ in 0..chains {
        let steps = {
            let mut rng = rand::thread_rng();
            rng.gen_range(min_steps..=max_steps)
        };

        for _ in 0..steps {
            let viewport = session.viewport();
            let (dx, dy) = {
                let mut rng = rand::thread_rng();
                (
                    i64::from(rng.gen_range(0..viewport.width)),
                    i64::from(rng.gen_range(0..viewport.height)),
                )
            };

            let moved = session.try_move_pointer(dx, dy).await?;
            if !moved {
                tracing::trace!("pointer target ({}, {}) out of bounds, skipped", dx, dy);
            }
            pause(STEP_PAUSE.0, STEP_PAUSE.1).await;
        }
    }

    Ok(())
}

/// Run a randomized number of vertical scroll bursts.
///
/// Draws a burst count from `[0, max_bursts]`; each burst pauses briefly
/// and then scrolls by an amount drawn from
/// `[-viewport_height, +viewport_height]`, so direction is random too.
pub async fn scroll_bursts<S>(session: &mut S, max_bursts: u32) -> Result<()>
where
    S: BrowserActions + Send + ?Sized,
{
    let bursts = {
        let mut rng = rand::thread_rng();
        rng.gen_range(0..=max_bursts)
    };
    tracing::trace!("running {} scroll bursts", bursts);

    for _ in 0..bursts {
        pause(BURST_PAUSE.0, BURST_PAUSE.1).await;

        let height = i64::from(session.viewport().height);
        let delta = {
            let mut rng = rand::thread_rng();
            rng.gen_range(-height..=height)
        };
        session.scroll_by(delta).await?;
    }

    Ok(())
}
