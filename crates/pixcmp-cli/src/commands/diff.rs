//! Image diff command

use crate::{DiffArgs, Method};
use anyhow::{bail, Result};
use pixcmp_core::DecodedImage;
use pixcmp_io::FormatRegistry;
use pixcmp_ops::{
    compare_fast, compare_fast_par, compare_precise_par_with, compare_precise_with, normalize,
    CompareOptions, ErrorScore,
};
use tracing::{debug, info};

pub fn run(args: DiffArgs) -> Result<()> {
    let registry = FormatRegistry::with_builtin_formats();
    let img_a = super::load_image(&registry, &args.a)?;
    let img_b = super::load_image(&registry, &args.b)?;

    info!(
        a = %args.a.display(),
        b = %args.b.display(),
        method = ?args.method,
        "comparing"
    );
    debug!(bounds_a = %img_a.bounds(), bounds_b = %img_b.bounds());

    let score = match args.method {
        Method::Precise => {
            let options = CompareOptions::new().with_alpha(!args.no_alpha);
            if args.parallel {
                compare_precise_par_with(&img_a, &img_b, &options)?
            } else {
                compare_precise_with(&img_a, &img_b, &options)?
            }
        }
        Method::Fast => {
            if args.no_alpha {
                debug!("--no-alpha has no effect on the fast method");
            }
            let a = normalize(&img_a);
            let b = normalize(&img_b);
            if args.parallel {
                compare_fast_par(&a, &b)?
            } else {
                compare_fast(&a, &b)?
            }
        }
    };

    println!("score: {}", score);
    check_threshold(score, args.threshold)
}

/// Fails when `score` is above `threshold`.
fn check_threshold(score: ErrorScore, threshold: Option<u64>) -> Result<()> {
    match threshold {
        Some(limit) if score > limit => {
            bail!("FAIL: score {} exceeds threshold {}", score, limit)
        }
        _ => Ok(()),
    }
}
