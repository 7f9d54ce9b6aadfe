// SPDX-License-Identifier: MPL-2.0
//! The text input builder and its iced rendering.

use super::style::{AffixStyle, Metrics, ResolvedStyle, Size, Variant};
use crate::design_tokens::{border, radius, sizing, spacing, typography};
use crate::theme::{Direction, Theme};
use iced::widget::{container, text, text_input, Column, Container, Stack};
use iced::{alignment, Background, Border, Color, Element, Length, Padding};

/// Which overlay slots exist and how the input text must make room for
/// them. Pure function of the props, so prefix/suffix behavior is testable
/// without a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffixLayout {
    pub has_prefix: bool,
    pub has_suffix: bool,
    /// Horizontal text padding, already widened on sides with an affix and
    /// resolved from logical start/end to physical left/right.
    pub padding_left: f32,
    pub padding_right: f32,
}

/// Computes the affix layout for the given props.
///
/// A side with an affix pushes the text in by the affix width plus the
/// standard 8px gap. `start` means left in LTR and right in RTL.
#[must_use]
pub fn affix_layout(
    size: Size,
    has_prefix: bool,
    has_suffix: bool,
    direction: Direction,
) -> AffixLayout {
    let metrics = size.metrics();
    let base = metrics.padding;
    let widened = metrics.affix_width + metrics.padding;

    let start = if has_prefix { widened } else { base };
    let end = if has_suffix { widened } else { base };

    let (padding_left, padding_right) = match direction {
        Direction::Ltr => (start, end),
        Direction::Rtl => (end, start),
    };

    AffixLayout {
        has_prefix,
        has_suffix,
        padding_left,
        padding_right,
    }
}

/// Themed text input with label, optional prefix/suffix overlays, and a
/// focus-indicator bar.
///
/// Stateless: construct it fresh in every `view` call.
pub struct TextInput<'a, Message> {
    theme: Theme,
    label: Option<&'a str>,
    placeholder: &'a str,
    value: &'a str,
    size: Size,
    variant: Variant,
    error: bool,
    disabled: bool,
    prefix: Option<&'a str>,
    prefix_style: AffixStyle,
    suffix: Option<&'a str>,
    suffix_style: AffixStyle,
    on_input: Option<Box<dyn Fn(String) -> Message + 'a>>,
    on_submit: Option<Message>,
    id: Option<String>,
}

impl<'a, Message: Clone + 'a> TextInput<'a, Message> {
    /// Creates an input showing the given value.
    #[must_use]
    pub fn new(theme: &Theme, value: &'a str) -> Self {
        Self {
            theme: *theme,
            label: None,
            placeholder: "",
            value,
            size: Size::default(),
            variant: Variant::default(),
            error: false,
            disabled: false,
            prefix: None,
            prefix_style: AffixStyle::default(),
            suffix: None,
            suffix_style: AffixStyle::default(),
            on_input: None,
            on_submit: None,
            id: None,
        }
    }

    /// Label rendered above the field, start-aligned.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Placeholder shown while the value is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Switches border and underline to the error palette.
    #[must_use]
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Disables editing and applies the disabled palette.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Decorative content anchored inside the input's start edge.
    #[must_use]
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    #[must_use]
    pub fn prefix_style(mut self, style: AffixStyle) -> Self {
        self.prefix_style = style;
        self
    }

    /// Decorative content anchored inside the input's end edge.
    #[must_use]
    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    #[must_use]
    pub fn suffix_style(mut self, style: AffixStyle) -> Self {
        self.suffix_style = style;
        self
    }

    /// Message produced as the user types. Without it (or when disabled)
    /// the field renders in its non-interactive state.
    #[must_use]
    pub fn on_input(mut self, on_input: impl Fn(String) -> Message + 'a) -> Self {
        self.on_input = Some(Box::new(on_input));
        self
    }

    /// Message produced when the user presses Enter.
    #[must_use]
    pub fn on_submit(mut self, message: Message) -> Self {
        self.on_submit = Some(message);
        self
    }

    /// Widget id, so hosts can address the underlying editable element
    /// (e.g. `iced::widget::text_input::focus`).
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builds the iced element.
    pub fn view(self) -> Element<'a, Message> {
        let resolved = ResolvedStyle::resolve(
            &self.theme,
            self.variant,
            self.error,
            self.disabled,
            self.prefix_style,
            self.suffix_style,
        );
        let metrics = self.size.metrics();
        let layout = affix_layout(
            self.size,
            self.prefix.is_some(),
            self.suffix.is_some(),
            self.theme.direction,
        );

        // Vertical padding centers the text within the preset height,
        // accounting for the 1px border on each side.
        let vertical = (metrics.height - metrics.font_size - 2.0 * border::WIDTH_SM) / 2.0;
        let padding = Padding {
            top: vertical,
            right: layout.padding_right,
            bottom: vertical,
            left: layout.padding_left,
        };

        let mut field = text_input(self.placeholder, self.value)
            .size(metrics.font_size)
            .padding(padding)
            .width(Length::Fill)
            .style(move |_theme: &iced::Theme, status| field_style(&resolved, status));

        if let Some(id) = self.id {
            field = field.id(iced::widget::Id::from(id));
        }
        if !self.disabled {
            if let Some(on_input) = self.on_input {
                field = field.on_input(move |value| on_input(value));
            }
            if let Some(on_submit) = self.on_submit {
                field = field.on_submit(on_submit);
            }
        }

        let mut layers: Vec<Element<'a, Message>> = vec![field.into()];
        let is_rtl = self.theme.direction.is_rtl();

        if let Some(prefix) = self.prefix {
            layers.push(affix_block(
                prefix,
                &resolved,
                resolved.prefix_rest,
                metrics,
                at_start(is_rtl),
            ));
        }
        if let Some(suffix) = self.suffix {
            layers.push(affix_block(
                suffix,
                &resolved,
                resolved.suffix_rest,
                metrics,
                at_end(is_rtl),
            ));
        }

        let stack = Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fixed(metrics.height));

        // Field and underline stay flush; the label keeps its 8px gap.
        let mut field_block = Column::new().push(stack);
        if !self.disabled {
            field_block = field_block.push(underline_bar(resolved.underline));
        }

        let mut root = Column::new().spacing(spacing::XS).width(Length::Fill);
        if let Some(label) = self.label {
            root = root.push(
                text(label)
                    .size(typography::BODY)
                    .color(resolved.font_color)
                    .width(Length::Fill)
                    .align_x(if is_rtl {
                        alignment::Horizontal::Right
                    } else {
                        alignment::Horizontal::Left
                    }),
            );
        }
        root.push(field_block).into()
    }
}

fn at_start(is_rtl: bool) -> alignment::Horizontal {
    if is_rtl {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    }
}

fn at_end(is_rtl: bool) -> alignment::Horizontal {
    if is_rtl {
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Right
    }
}

/// One prefix/suffix overlay block, anchored inside the field's border.
fn affix_block<'a, Message: 'a>(
    content: &'a str,
    resolved: &ResolvedStyle,
    background: Color,
    metrics: Metrics,
    side: alignment::Horizontal,
) -> Element<'a, Message> {
    let muted = resolved.placeholder_color;
    let rounded_left = matches!(side, alignment::Horizontal::Left);

    let block = Container::new(text(content).size(typography::BODY_LG).color(muted))
        .width(Length::Fixed(metrics.affix_width))
        .height(Length::Fixed(metrics.affix_height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: affix_radius(rounded_left),
                ..Default::default()
            },
            ..Default::default()
        });

    // Inset by the field border so the block sits inside it.
    Container::new(block)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(side)
        .align_y(alignment::Vertical::Center)
        .padding(border::WIDTH_SM)
        .into()
}

/// Rounds only the corners meeting the field's outer edge.
fn affix_radius(left: bool) -> iced::border::Radius {
    if left {
        iced::border::Radius {
            top_left: radius::SM,
            bottom_left: radius::SM,
            top_right: radius::NONE,
            bottom_right: radius::NONE,
        }
    } else {
        iced::border::Radius {
            top_left: radius::NONE,
            bottom_left: radius::NONE,
            top_right: radius::SM,
            bottom_right: radius::SM,
        }
    }
}

/// The 2px focus-indicator bar under the field.
fn underline_bar<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    container(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::INPUT_UNDERLINE))
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: iced::border::Radius {
                    top_left: radius::NONE,
                    top_right: radius::NONE,
                    bottom_left: radius::FULL,
                    bottom_right: radius::FULL,
                },
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Maps the iced interaction status onto the resolved border set.
fn field_style(resolved: &ResolvedStyle, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Active => resolved.border,
        text_input::Status::Hovered => resolved.border_hovered,
        text_input::Status::Focused { .. } => resolved.border_focused,
        text_input::Status::Disabled => resolved.border,
    };

    text_input::Style {
        background: Background::Color(resolved.background),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        icon: resolved.placeholder_color,
        placeholder: resolved.placeholder_color,
        value: resolved.font_color,
        selection: resolved.prefix_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_affixes_means_no_overlay_slots_and_base_padding() {
        let layout = affix_layout(Size::Large, false, false, Direction::Ltr);

        assert!(!layout.has_prefix);
        assert!(!layout.has_suffix);
        assert_eq!(layout.padding_left, sizing::INPUT_PADDING);
        assert_eq!(layout.padding_right, sizing::INPUT_PADDING);
    }

    #[test]
    fn prefix_widens_the_start_side() {
        let layout = affix_layout(Size::Large, true, false, Direction::Ltr);

        assert!(layout.has_prefix);
        assert_eq!(
            layout.padding_left,
            sizing::AFFIX_WIDTH_LARGE + sizing::INPUT_PADDING
        );
        assert_eq!(layout.padding_right, sizing::INPUT_PADDING);
    }

    #[test]
    fn suffix_widens_the_end_side() {
        let layout = affix_layout(Size::Medium, false, true, Direction::Ltr);

        assert_eq!(layout.padding_left, sizing::INPUT_PADDING);
        assert_eq!(
            layout.padding_right,
            sizing::AFFIX_WIDTH_MEDIUM + sizing::INPUT_PADDING
        );
    }

    #[test]
    fn rtl_swaps_start_and_end() {
        let ltr = affix_layout(Size::Large, true, false, Direction::Ltr);
        let rtl = affix_layout(Size::Large, true, false, Direction::Rtl);

        assert_eq!(rtl.padding_left, ltr.padding_right);
        assert_eq!(rtl.padding_right, ltr.padding_left);
    }

    #[test]
    fn both_affixes_widen_both_sides() {
        let layout = affix_layout(Size::Large, true, true, Direction::Ltr);
        let widened = sizing::AFFIX_WIDTH_LARGE + sizing::INPUT_PADDING;

        assert_eq!(layout.padding_left, widened);
        assert_eq!(layout.padding_right, widened);
    }

    #[test]
    fn field_style_maps_status_to_the_resolved_borders() {
        let theme = Theme::light();
        let resolved = ResolvedStyle::resolve(
            &theme,
            Variant::Default,
            false,
            false,
            AffixStyle::Solid,
            AffixStyle::Solid,
        );

        let active = field_style(&resolved, text_input::Status::Active);
        let hovered = field_style(&resolved, text_input::Status::Hovered);

        assert_eq!(active.border.color, resolved.border);
        assert_eq!(hovered.border.color, resolved.border_hovered);
        assert_eq!(active.value, resolved.font_color);
    }

    #[test]
    fn affix_corners_round_toward_the_outer_edge() {
        let left = affix_radius(true);
        assert_eq!(left.top_left, radius::SM);
        assert_eq!(left.top_right, radius::NONE);

        let right = affix_radius(false);
        assert_eq!(right.top_right, radius::SM);
        assert_eq!(right.top_left, radius::NONE);
    }
}
