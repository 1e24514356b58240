use anyhow::Result;
use argh::FromArgs;
use nanorand::*;
use shade_noise::{debug_image::*, Config};

#[derive(FromArgs)]
/// Render a grey-scale preview of a noise pattern
struct Args {
    /// path to the TOML config
    #[argh(positional)]
    config: String,
    /// where to write the PNG, defaults to preview.png
    #[argh(option, default = "String::from(\"preview.png\")")]
    out: String,
    /// seed to use, overriding the config. If neither sets one, a random seed is chosen.
    #[argh(option)]
    seed: Option<u64>,
    /// value mapped to black, defaults to 0 when only --high is given.
    /// Without either bound the observed range is stretched to black..white.
    #[argh(option)]
    low: Option<f32>,
    /// value mapped to white, defaults to 1 when only --low is given
    #[argh(option)]
    high: Option<f32>,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let config = Config::load(&args.config)?;
    let levels = Levels::from_bounds(args.low, args.high)?;

    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or(tls_rng().generate::<u16>() as u64 % 999);
    println!("Seed: {seed}");

    let shader = config.shader(seed);
    let image = PatternImage::render(&shader, config.view());
    if let Some((min, max)) = image.range() {
        println!("Value range: {min} .. {max}");
    }

    image.save(&args.out, levels)?;
    println!("Wrote {} ({}x{})", args.out, config.width, config.height);
    Ok(())
}
