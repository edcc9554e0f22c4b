use drumhead::DrumParameters;

const OUTPUT_PATH: &str = "drum.png";

fn main() {
    if let Err(err) = drumhead::render_to_file(&DrumParameters::default(), OUTPUT_PATH) {
        eprintln!("drumhead: {}", err);
        std::process::exit(1);
    }
}
