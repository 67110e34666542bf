use nn_sketch::{draw_nn, SvgSurface};

fn main() {
    let counts = [3, 5, 2];
    let labels = [Some("input"), Some("hidden"), Some("output")];

    let mut svg = SvgSurface::new();
    match draw_nn(&counts, &labels, &mut svg).and_then(|_| svg.document().map(str::to_owned)) {
        Ok(doc) => print!("{doc}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
