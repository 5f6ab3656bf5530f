//! Drawing primitives and their SVG serialization

use super::escape_xml;
use crate::render_config::FontWeight;

/// A text run anchored at its baseline
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub weight: Option<FontWeight>,
    pub fill: String,
    pub family: String,
    /// `text-anchor` value, `start` when absent
    pub anchor: Option<&'static str>,
    pub decoration: Option<&'static str>,
    pub uppercase: bool,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: Option<f64>,
    pub fill: String,
    pub stroke: Option<String>,
    pub dash: Option<&'static str>,
}

/// One drawable item in the output
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Text(TextShape),
    Rect(RectShape),
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
    /// Named group, written as `<g class="...">`
    Group {
        class: &'static str,
        children: Vec<Shape>,
    },
}

impl Shape {
    /// Append the SVG markup for this shape, one element per line
    pub fn write_svg(&self, output: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Shape::Text(text) => {
                output.push_str(&indent);
                write_text(output, text);
            }
            Shape::Rect(rect) => {
                output.push_str(&indent);
                write_rect(output, rect);
            }
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } => {
                output.push_str(&format!(
                    "{indent}<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                    escape_xml(stroke)
                ));
            }
            Shape::Circle { cx, cy, r, fill } => {
                output.push_str(&format!(
                    "{indent}<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{}\"/>\n",
                    escape_xml(fill)
                ));
            }
            Shape::Group { class, children } => {
                output.push_str(&format!("{indent}<g class=\"{class}\">\n"));
                for child in children {
                    child.write_svg(output, depth + 1);
                }
                output.push_str(&format!("{indent}</g>\n"));
            }
        }
    }
}

fn write_text(output: &mut String, text: &TextShape) {
    output.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\"",
        text.x, text.y, text.size
    ));
    if let Some(weight) = text.weight {
        output.push_str(&format!(" font-weight=\"{}\"", weight.as_str()));
    }
    output.push_str(&format!(
        " fill=\"{}\" font-family=\"{}\"",
        escape_xml(&text.fill),
        escape_xml(&text.family)
    ));
    if let Some(anchor) = text.anchor {
        output.push_str(&format!(" text-anchor=\"{anchor}\""));
    }
    if let Some(decoration) = text.decoration {
        output.push_str(&format!(" text-decoration=\"{decoration}\""));
    }
    if text.uppercase {
        output.push_str(" text-transform=\"uppercase\"");
    }
    output.push_str(&format!(">{}</text>\n", escape_xml(&text.content)));
}

fn write_rect(output: &mut String, rect: &RectShape) {
    output.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
        rect.x, rect.y, rect.width, rect.height
    ));
    if let Some(rx) = rect.corner_radius {
        output.push_str(&format!(" rx=\"{rx}\""));
    }
    output.push_str(&format!(" fill=\"{}\"", escape_xml(&rect.fill)));
    if let Some(ref stroke) = rect.stroke {
        output.push_str(&format!(
            " stroke=\"{}\" stroke-width=\"1\"",
            escape_xml(stroke)
        ));
    }
    if let Some(dash) = rect.dash {
        output.push_str(&format!(" stroke-dasharray=\"{dash}\""));
    }
    output.push_str("/>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_text(content: &str) -> TextShape {
        TextShape {
            x: 40.0,
            y: 54.0,
            size: 14.0,
            weight: None,
            fill: "#333333".to_string(),
            family: "Arial, sans-serif".to_string(),
            anchor: None,
            decoration: None,
            uppercase: false,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_text_markup() {
        let mut output = String::new();

        Shape::Text(sample_text("Fish & Chips")).write_svg(&mut output, 0);

        assert_eq!(
            output,
            "<text x=\"40\" y=\"54\" font-size=\"14\" fill=\"#333333\" font-family=\"Arial, sans-serif\">Fish &amp; Chips</text>\n"
        );
    }

    #[test]
    fn test_fractional_coordinates_are_kept() {
        let mut text = sample_text("x");
        text.x = 65.5;
        let mut output = String::new();

        Shape::Text(text).write_svg(&mut output, 0);

        assert!(output.starts_with("<text x=\"65.5\""));
    }

    #[test]
    fn test_dashed_rect_markup() {
        let rect = RectShape {
            x: 20.0,
            y: 40.0,
            width: 920.0,
            height: 84.0,
            corner_radius: None,
            fill: "#FAFAFA".to_string(),
            stroke: Some("#CCCCCC".to_string()),
            dash: Some("4,4"),
        };
        let mut output = String::new();

        Shape::Rect(rect).write_svg(&mut output, 1);

        assert_eq!(
            output,
            "  <rect x=\"20\" y=\"40\" width=\"920\" height=\"84\" fill=\"#FAFAFA\" stroke=\"#CCCCCC\" stroke-width=\"1\" stroke-dasharray=\"4,4\"/>\n"
        );
    }

    #[test]
    fn test_group_indents_children() {
        let group = Shape::Group {
            class: "list-item",
            children: vec![Shape::Circle {
                cx: 50.0,
                cy: 49.0,
                r: 3.0,
                fill: "#333333".to_string(),
            }],
        };
        let mut output = String::new();

        group.write_svg(&mut output, 0);

        assert_eq!(
            output,
            "<g class=\"list-item\">\n  <circle cx=\"50\" cy=\"49\" r=\"3\" fill=\"#333333\"/>\n</g>\n"
        );
    }

    #[test]
    fn test_line_and_rect_colors_are_escaped() {
        let line = Shape::Line {
            x1: 40.0,
            y1: 10.0,
            x2: 920.0,
            y2: 10.0,
            stroke: "red\" x=\"1".to_string(),
        };
        let rect = RectShape {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            corner_radius: Some(4.0),
            fill: "<fill>".to_string(),
            stroke: Some("a&b".to_string()),
            dash: None,
        };
        let mut output = String::new();

        line.write_svg(&mut output, 0);
        Shape::Rect(rect).write_svg(&mut output, 0);

        assert!(output.contains("stroke=\"red&quot; x=&quot;1\""));
        assert!(output.contains("fill=\"&lt;fill&gt;\" stroke=\"a&amp;b\""));
    }
}
