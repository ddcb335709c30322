//! Generate QR codes through the library API
//!
//! Usage: cargo run --example generate_qr

use linkqr::{Color, QrEncoder, QrRequest, RenderSettings};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Fixed defaults: version 1 upwards, level L, 10px boxes, 4-module border
    linkqr::generate("https://example.com/app.apk", "qr_output.png")?;

    // Same payload with pass-through size and colors
    let render = RenderSettings {
        box_size: 6,
        border: 2,
        fill_color: "#1d3557".parse::<Color>()?,
        back_color: Color::WHITE,
    };
    QrRequest::new("https://example.com/app.apk")
        .with_output("qr_styled.png")
        .run(&QrEncoder::with_render_settings(render), &mut std::io::stdout())?;

    Ok(())
}
