use std::time::Instant;

use pikatts::engines::pico::{voices, PicoEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let init_start = Instant::now();
    let mut engine = PicoEngine::new(&voices::BRITISH)?;
    println!("Engine initialized in {:.2?}", init_start.elapsed());

    let text = "Hello! This is SVOX Pico, a compact text to speech engine. \
                It supports American English, British English, French, German, \
                Italian, and Spanish.";

    let synth_start = Instant::now();
    let result = engine.synthesize(text)?;
    let synth_dur = synth_start.elapsed();

    let audio_duration = result.duration_secs();
    let speedup = audio_duration / synth_dur.as_secs_f64();
    println!(
        "Synthesized {:.2}s audio in {:.2?} ({:.1}x real-time)",
        audio_duration, synth_dur, speedup
    );

    result.write_wav("output.wav")?;
    println!("Saved to output.wav");

    engine.close()?;
    Ok(())
}
