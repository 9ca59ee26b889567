use std::fs;
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use charming::{Chart, ImageRenderer};
use charming::component::{Axis, Grid, Legend, Title};
use charming::element::{AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, Tooltip, Trigger};
use charming::element::font_settings::FontWeight;
use charming::series::{Line, Series};
use crate::config::{PlotConfig, CHART_BACKGROUND, CHART_THEME};
use crate::lines::{Operation, PlotLine};

const X_NAME: &str = "block size, double precision samples";
const Y_NAME: &str = "time per operation, ns";

impl Operation {
    fn line_type(self) -> LineStyleType {
        match self {
            Operation::Write => LineStyleType::Solid,
            Operation::Read  => LineStyleType::Dashed,
        }
    }
}

/// Log-scale latency chart over block size.
///
/// Lines are drawn in the order given.
pub fn chart(title: String, lines: &[PlotLine]) -> Chart {
    let legend = legend_names(lines);

    let mut chart =
    Chart::new()
        .background_color(CHART_BACKGROUND)
        .title(
            Title::new()
            .text(title)
            .left("center")
        )
        .tooltip(
            Tooltip::new().trigger(Trigger::Axis)
        )
        .legend(
            Legend::new()
                .top("bottom")
                .data(legend)
        )
        .grid(
            Grid::new()
                .left(100)
                .right(60)
                .top(60)
                .bottom(80)
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(X_NAME)
                .axis_label(
                    AxisLabel::new().show(true)
                        .font_size(13)
                        .font_weight(FontWeight::Bolder)
                        .color("#666666")
                )
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Log)
                .name(Y_NAME)
        );

    for line in lines {
        let color = line.implementation.color();
        let mut series =
            Line::new()
            .symbol(line.implementation.symbol())
            .symbol_size(6.0)
            .item_style(ItemStyle::new().color(color))
            .line_style(
                LineStyle::new()
                .color(color)
                .type_(line.operation.line_type())
            )
            .data(
                line.points.iter()
                .map(|&[x, y]| vec![x, y])
                .collect::<Vec<Vec<f64>>>()
            );
        if let Some(name) = line.legend {
            series = series.name(name);
        }
        chart = chart.series(Series::Line(series));
    }
    chart
}

/// Legend entries: one per labelled line, in line order.
fn legend_names(lines: &[PlotLine]) -> Vec<String> {
    lines.iter()
        .filter_map(|line| line.legend)
        .map(String::from)
        .collect()
}

/// Render `chart` to PNG at `path`, replacing any existing file.
pub fn save_png(chart: &Chart, path: impl AsRef<Path>, config: &PlotConfig) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut renderer = ImageRenderer::new(config.width, config.height).theme(CHART_THEME);
    renderer.save_format(charming::ImageFormat::Png, chart, path)
        .map_err(|err| anyhow!("rendering {}: {err:?}", path.display()))?;
    tracing::info!(path = %path.display(), "chart saved");
    Ok(())
}

#[cfg(test)]
mod test_chart {
    use super::*;
    use crate::implementation::Implementation;

    #[test]
    fn test_line_types() {
        assert!(matches!(Operation::Write.line_type(), LineStyleType::Solid));
        assert!(matches!(Operation::Read.line_type(), LineStyleType::Dashed));
    }

    fn line(implementation: Implementation, legend: Option<&'static str>) -> PlotLine {
        PlotLine {
            implementation,
            operation: Operation::Read,
            legend,
            points: vec![[64.0, 10.0], [128.0, 20.0]],
        }
    }

    #[test]
    fn test_legend_only_labelled_lines() {
        let lines = [
            line(Implementation::Baseline, Some("Baseline")),
            line(Implementation::SeqLock, Some("SeqLock")),
            line(Implementation::Baseline, None),
            line(Implementation::SeqLock, None),
        ];
        assert_eq!(legend_names(&lines), ["Baseline", "SeqLock"]);
        let _chart = chart(String::from("read"), &lines);
    }

    #[test]
    fn test_chart_without_lines() {
        assert!(legend_names(&[]).is_empty());
        let _chart = chart(String::from("empty"), &[]);
    }
}
