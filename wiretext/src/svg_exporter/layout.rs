//! Vertical flow layout
//!
//! Elements stack top to bottom from a single cursor. Every element starts
//! at the left padding; nothing is laid out side by side.

use super::shape::{RectShape, Shape, TextShape};
use crate::render_config::{FontSpec, FontWeight, RenderConfig};
use crate::source_model::Element;

/// Shapes for a whole document plus the canvas height they need
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub shapes: Vec<Shape>,
    pub height: f64,
}

/// Layout state: the vertical cursor and the shapes placed so far
pub struct LayoutContext<'a> {
    config: &'a RenderConfig,
    cursor: f64,
    shapes: Vec<Shape>,
}

impl<'a> LayoutContext<'a> {
    /// Start a layout with the cursor at the top padding
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            cursor: config.padding,
            shapes: Vec::new(),
        }
    }

    /// Current vertical position
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Page title drawn as a level 1 heading with a little extra space
    pub fn place_title(&mut self, title: &str) {
        self.heading(1, title);
        self.cursor += self.config.spacing.small;
    }

    /// Place one element and advance the cursor past it
    pub fn place(&mut self, element: &Element) {
        match element {
            Element::Heading { level, text } => self.heading(*level, text),
            Element::Button { text } => self.button(text),
            Element::Input { label } => self.input(label),
            Element::Image { description } => self.image(description),
            Element::Link { text, .. } | Element::SkipLink { text } => self.link(text),
            Element::Text { content } => self.text(content),
            Element::ListItem { content } => self.list_item(content),
            Element::Divider => self.divider(),
            Element::Landmark { name, children } => self.landmark(name, children),
        }
    }

    /// Finish the layout, adding the bottom padding to the height
    pub fn finish(self) -> Layout {
        Layout {
            height: self.cursor + self.config.padding,
            shapes: self.shapes,
        }
    }

    fn text_shape(&self, x: f64, y: f64, font: FontSpec, fill: &str, content: &str) -> TextShape {
        TextShape {
            x,
            y,
            size: font.size,
            weight: None,
            fill: fill.to_string(),
            family: self.config.fonts.family.clone(),
            anchor: None,
            decoration: None,
            uppercase: false,
            content: content.to_string(),
        }
    }

    fn heading(&mut self, level: u8, text: &str) {
        let font = self.config.fonts.heading(level);
        let y = self.cursor + font.size;

        let mut shape = self.text_shape(self.config.padding, y, font, &self.config.colors.text, text);
        shape.weight = Some(font.weight);
        self.shapes.push(Shape::Text(shape));

        self.cursor = y + self.config.spacing.element;
    }

    fn button(&mut self, text: &str) {
        let style = self.config.button;
        let body = self.config.fonts.body;
        let label_width = text.chars().count() as f64 * style.char_width;
        let width = (label_width + style.padding_x * 2.0).max(style.min_width);
        let x = self.config.padding;
        let y = self.cursor;

        let frame = RectShape {
            x,
            y,
            width,
            height: style.height,
            corner_radius: Some(style.border_radius),
            fill: self.config.colors.button_bg.clone(),
            stroke: Some(self.config.colors.button_border.clone()),
            dash: None,
        };
        let mut label = self.text_shape(
            x + width / 2.0,
            y + style.height / 2.0 + 5.0,
            body,
            &self.config.colors.text,
            text,
        );
        label.weight = Some(body.weight);
        label.anchor = Some("middle");

        self.shapes.push(Shape::Group {
            class: "button",
            children: vec![Shape::Rect(frame), Shape::Text(label)],
        });
        self.cursor = y + style.height + self.config.spacing.element;
    }

    fn input(&mut self, label: &str) {
        let font = self.config.fonts.label;
        let label_y = self.cursor + font.size;
        let box_y = label_y + self.config.spacing.small;

        let mut caption = self.text_shape(
            self.config.padding,
            label_y,
            font,
            &self.config.colors.text_light,
            label,
        );
        caption.weight = Some(font.weight);
        let field = RectShape {
            x: self.config.padding,
            y: box_y,
            width: self.config.content_width(),
            height: self.config.input.height,
            corner_radius: Some(self.config.input.border_radius),
            fill: self.config.colors.background.clone(),
            stroke: Some(self.config.colors.border.clone()),
            dash: None,
        };

        self.shapes.push(Shape::Group {
            class: "input-field",
            children: vec![Shape::Text(caption), Shape::Rect(field)],
        });
        self.cursor = box_y + self.config.input.height + self.config.spacing.element;
    }

    fn image(&mut self, description: &str) {
        let content_width = self.config.content_width();
        let width = content_width * self.config.image.default_width;
        let height = self.config.image.min_height;
        let x = self.config.padding + (content_width - width) / 2.0;
        let y = self.cursor;
        let border = &self.config.colors.border;

        let frame = RectShape {
            x,
            y,
            width,
            height,
            corner_radius: None,
            fill: self.config.colors.image_placeholder.clone(),
            stroke: Some(border.clone()),
            dash: None,
        };
        let mut caption = self.text_shape(
            x + width / 2.0,
            y + height / 2.0 + 5.0,
            self.config.fonts.label,
            &self.config.colors.text_light,
            description,
        );
        caption.anchor = Some("middle");

        self.shapes.push(Shape::Group {
            class: "image-placeholder",
            children: vec![
                Shape::Rect(frame),
                Shape::Line {
                    x1: x,
                    y1: y,
                    x2: x + width,
                    y2: y + height,
                    stroke: border.clone(),
                },
                Shape::Line {
                    x1: x + width,
                    y1: y,
                    x2: x,
                    y2: y + height,
                    stroke: border.clone(),
                },
                Shape::Text(caption),
            ],
        });
        self.cursor = y + height + self.config.spacing.element;
    }

    fn link(&mut self, text: &str) {
        let body = self.config.fonts.body;
        let y = self.cursor + body.size;

        let mut shape = self.text_shape(self.config.padding, y, body, &self.config.colors.link, text);
        shape.decoration = Some("underline");
        self.shapes.push(Shape::Text(shape));

        self.cursor = y + self.config.spacing.element;
    }

    fn text(&mut self, content: &str) {
        let body = self.config.fonts.body;
        let y = self.cursor + body.size;

        let shape = self.text_shape(self.config.padding, y, body, &self.config.colors.text, content);
        self.shapes.push(Shape::Text(shape));

        self.cursor = y + self.config.spacing.element;
    }

    fn list_item(&mut self, content: &str) {
        let body = self.config.fonts.body;
        let y = self.cursor + body.size;
        let bullet_x = self.config.padding + 10.0;

        let bullet = Shape::Circle {
            cx: bullet_x,
            cy: y - 5.0,
            r: 3.0,
            fill: self.config.colors.text.clone(),
        };
        let text = self.text_shape(bullet_x + 15.0, y, body, &self.config.colors.text, content);

        self.shapes.push(Shape::Group {
            class: "list-item",
            children: vec![bullet, Shape::Text(text)],
        });
        self.cursor = y + self.config.spacing.element;
    }

    fn divider(&mut self) {
        let y = self.cursor + self.config.spacing.small;

        self.shapes.push(Shape::Line {
            x1: self.config.padding,
            y1: y,
            x2: self.config.padding + self.config.content_width(),
            y2: y,
            stroke: self.config.colors.border.clone(),
        });
        self.cursor = y + self.config.spacing.element;
    }

    /// Two passes: children are laid out into their own buffer so the
    /// background can be sized before anything is emitted
    fn landmark(&mut self, name: &str, children: &[Element]) {
        let start = self.cursor;
        let outer = std::mem::take(&mut self.shapes);

        let font = self.config.fonts.label;
        let label_y = self.cursor + font.size;
        let mut label = self.text_shape(
            self.config.padding,
            label_y,
            font,
            &self.config.colors.text_light,
            name,
        );
        label.weight = Some(FontWeight::Bold);
        label.uppercase = true;
        self.shapes.push(Shape::Text(label));
        self.cursor = label_y + self.config.spacing.element;

        for child in children {
            self.place(child);
        }

        let inner = std::mem::replace(&mut self.shapes, outer);
        let background = RectShape {
            x: self.config.padding / 2.0,
            y: start,
            width: self.config.page_width - self.config.padding,
            height: self.cursor - start + self.config.spacing.small,
            corner_radius: None,
            fill: self.config.colors.landmark_bg.clone(),
            stroke: Some(self.config.colors.border.clone()),
            dash: Some("4,4"),
        };

        let mut group = Vec::with_capacity(inner.len() + 1);
        group.push(Shape::Rect(background));
        group.extend(inner);
        self.shapes.push(Shape::Group {
            class: "landmark",
            children: group,
        });

        self.cursor += self.config.spacing.section;
    }
}
