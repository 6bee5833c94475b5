// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The screen is a title band above the status panel, optionally laid over a
//! background image. Its padding comes from [`crate::ui::layout`] so the
//! measured panel size matches what is drawn.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::layout;
use crate::ui::status::StatusView;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{Handle, Image};
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub status: StatusView<'a>,
    pub colors: ColorScheme,
    pub background: Option<&'a Handle>,
}

/// Renders the status screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Container::new(
        Text::new(ctx.i18n.tr("screen-title"))
            .size(typography::TITLE_LG)
            .color(ctx.colors.text_primary),
    )
    .width(Length::Fill)
    .height(Length::Fixed(layout::TITLE_BAND_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let panel = Container::new(ctx.status.view(&ctx.colors))
        .padding(layout::PANEL_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::panel);

    let content = Column::new()
        .push(title)
        .push(panel)
        .spacing(layout::TITLE_GAP)
        .padding(layout::SCREEN_PADDING)
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.background {
        Some(handle) => {
            let backdrop = Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover);
            Stack::new()
                .push(backdrop)
                .push(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        None => Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::screen(ctx.colors.surface_primary))
            .into(),
    }
}
