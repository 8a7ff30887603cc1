use code128b::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let carrier = args.next().unwrap_or_else(|| "/ABC123".to_string());
    let output = args.next().unwrap_or_else(|| "carrier.png".to_string());

    // honey tones: canvas, bars, bar background
    let theme = Theme::from_hex(Some("#FFE135"), Some("#8B4513"), Some("#FFF8DC")).unwrap();

    match compose::compose_text(&carrier, ThemedLayout::DEFAULT_SIZE, &theme) {
        Ok(canvas) => {
            canvas.save_png(&output).unwrap();
            println!("wrote {output}");
        }
        Err(err) => {
            eprintln!("cannot render {carrier:?}: {err}");
            std::process::exit(1);
        }
    }
}
