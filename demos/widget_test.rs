//! Builds the widget test form: one of each field type plus labels.
//!
//! ```text
//! cargo run --example widget_test -- [OUTPUT]
//! ```

use clap::Parser;
use pdf_formgen::geometry::{Point, Rect};
use pdf_formgen::writer::form_fields::{
    CheckboxField, ChoiceField, RadioField, SignatureField, TextField,
};
use pdf_formgen::writer::DocumentBuilder;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "widget_test", about = "Write a one-page PDF with interactive form widgets")]
struct Cli {
    /// Output file
    #[arg(default_value = "WidgetTest.pdf")]
    output: PathBuf,

    /// Compress page content streams
    #[arg(long)]
    compress: bool,
}

fn build(cli: &Cli) -> pdf_formgen::Result<()> {
    let config = pdf_formgen::DocumentConfig::new()
        .with_compress(cli.compress)
        .with_title("Widget Test")
        .with_creator("widget_test");
    let mut builder = DocumentBuilder::with_config(config)?;

    builder.add_widget(TextField::new("TextField1"), Rect::new(50.0, 700.0, 300.0, 24.0))?;
    builder.add_widget(CheckboxField::new("CheckBox1"), Rect::new(50.0, 650.0, 20.0, 20.0))?;
    for x in [50.0, 100.0] {
        builder.add_widget(RadioField::new("RadioGroup1"), Rect::new(x, 600.0, 20.0, 20.0))?;
    }
    builder.add_widget(
        ChoiceField::combo("ChoiceField1", ["Option A", "Option B", "Option C"])
            .with_value("Option A"),
        Rect::new(50.0, 550.0, 200.0, 24.0),
    )?;
    builder.add_widget(
        SignatureField::new("SignatureField1"),
        Rect::new(50.0, 480.0, 300.0, 100.0),
    )?;

    let labels = [
        ("Text Field:", 50.0, 726.0),
        ("Checkbox:", 50.0, 676.0),
        ("Radio Buttons:", 50.0, 626.0),
        ("(two circles)", 150.0, 626.0),
        ("Choice List:", 50.0, 576.0),
        ("Signature Field:", 50.0, 588.0),
    ];
    for (text, x, y) in labels {
        builder.add_label(text, Point::new(x, y))?;
    }

    builder.finalize()?.save(&cli.output)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match build(&cli) {
        Ok(()) => println!("✔️  Saved PDF to {}", cli.output.display()),
        Err(e) => {
            eprintln!("❌  Failed to write {}: {}", cli.output.display(), e);
            std::process::exit(1);
        },
    }
}
