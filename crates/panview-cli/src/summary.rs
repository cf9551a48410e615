use console::Style;
use panview_core::geometry::{PixelRect, Point, Size};
use panview_core::view::ViewState;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    flag: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            flag: Style::new().green(),
        }
    }
}

/// Everything needed to describe one recompute.
pub struct CropReport {
    pub image: Size,
    pub viewport: Size,
    pub effective: Size,
    pub crop: PixelRect,
    pub view: ViewState,
}

pub fn print_crop_report(title: &str, report: &CropReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();

    let row = |label: &str, value: String| {
        println!("  {:<14}{}", s.label.apply_to(label), s.value.apply_to(value));
    };

    row("Image", format_size(report.image));
    row("Viewport", format_size(report.viewport));
    row("Effective", format_size(report.effective));
    if report.view.fit_to_size {
        println!("  {:<14}{}", s.label.apply_to("Scaling"), s.flag.apply_to("fit to size"));
    } else {
        row("Zoom", format!("{:.2}x", report.view.zoom));
    }
    row(
        "Crop",
        format!(
            "({}, {}) .. ({}, {})  {}",
            report.crop.left(),
            report.crop.top(),
            report.crop.right(),
            report.crop.bottom(),
            format_size(report.crop.size())
        ),
    );
    row("Pan offset", format_point(report.view.pan_offset));
    println!();
}

fn format_size(size: Size) -> String {
    format!("{}x{}", size.width, size.height)
}

fn format_point(p: Point) -> String {
    format!("({}, {})", p.x, p.y)
}
