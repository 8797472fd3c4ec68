//! Plain-text presentation of a catalog page.
//!
//! Every function returns a `String` so callers decide where output goes.
//! Image URIs are printed verbatim and never fetched.

use crate::filter::FilterCriteria;
use crate::model::{Recipe, Tip};
use crate::state::CatalogView;

pub const SITE_TITLE: &str = "🍳 Кулинарная книга";
pub const SITE_TAGLINE: &str = "Вкусные рецепты для каждого дня";
pub const NAV_LINKS: [&str; 2] = ["Рецепты", "Хитрости"];
pub const HERO_TITLE: &str = "Готовьте с удовольствием";
pub const HERO_SUBTITLE: &str =
    "Простые и вкусные рецепты для каждого дня. От быстрых завтраков до изысканных ужинов.";
pub const HERO_ACTION: &str = "Начать готовить";
pub const RECIPES_HEADING: &str = "Наши рецепты";
pub const TIPS_HEADING: &str = "Кулинарные хитрости";
pub const NO_RESULTS: &str = "Рецепты не найдены. Попробуйте изменить фильтры.";
pub const RESET_LABEL: &str = "Сбросить фильтры";
pub const SEARCH_PLACEHOLDER: &str = "Поиск по названию или ингредиентам...";
pub const COPYRIGHT: &str = "© 2024 Все права защищены";

fn badge(recipe: &Recipe) -> String {
    format!("[{}]", recipe.difficulty.label())
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

/// One card of the recipe grid.
pub fn render_card(recipe: &Recipe) -> String {
    format!(
        "#{} {} {}\n    {} мин · {}\n    {}\n",
        recipe.id,
        recipe.title,
        badge(recipe),
        recipe.time,
        recipe.category,
        recipe.image
    )
}

/// The recipe grid, or the empty-state message when nothing matched.
pub fn render_recipe_list(recipes: &[&Recipe]) -> String {
    if recipes.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    recipes.iter().map(|r| render_card(r)).collect()
}

pub fn render_filter_bar(criteria: &FilterCriteria) -> String {
    let mut out = String::new();
    if criteria.search.is_empty() {
        line(&mut out, &format!("Поиск: ({SEARCH_PLACEHOLDER})"));
    } else {
        line(&mut out, &format!("Поиск: {}", criteria.search));
    }
    out.push_str(&format!(
        "Время: {} | Сложность: {}",
        criteria.time.label(),
        criteria.difficulty.label()
    ));
    if !criteria.is_default() {
        out.push_str(&format!(" | [{RESET_LABEL}]"));
    }
    out.push('\n');
    out
}

/// The detail overlay: ingredients in order and numbered steps.
pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    line(&mut out, &format!("{} [x]", recipe.title));
    line(
        &mut out,
        &format!(
            "{} · {} минут · {}",
            badge(recipe),
            recipe.time,
            recipe.category
        ),
    );
    line(&mut out, &format!("Фото: {}", recipe.image));
    out.push('\n');

    line(&mut out, "Ингредиенты");
    for ingredient in &recipe.ingredients {
        line(&mut out, &format!("  ✓ {ingredient}"));
    }
    out.push('\n');

    line(&mut out, "Приготовление");
    for (number, step) in recipe.numbered_steps() {
        line(&mut out, &format!("  {number}. {step}"));
    }
    out
}

pub fn render_tips(tips: &[Tip]) -> String {
    let mut out = String::new();
    line(&mut out, TIPS_HEADING);
    for tip in tips {
        line(&mut out, &format!("  💡 {}", tip.title));
        line(&mut out, &format!("     {}", tip.text));
    }
    out
}

fn rule(out: &mut String) {
    line(out, &"─".repeat(40));
}

/// Header, hero block and call to action.
pub fn render_header() -> String {
    let mut out = String::new();
    line(&mut out, &format!("{SITE_TITLE}    {}", NAV_LINKS.join(" | ")));
    rule(&mut out);
    line(&mut out, HERO_TITLE);
    line(&mut out, HERO_SUBTITLE);
    line(&mut out, &format!("[{HERO_ACTION}]"));
    out
}

pub fn render_footer() -> String {
    let mut out = String::new();
    line(&mut out, SITE_TITLE);
    line(&mut out, SITE_TAGLINE);
    line(&mut out, COPYRIGHT);
    out
}

/// The whole page for the current state of `view`.
pub fn render_page(view: &CatalogView) -> String {
    let mut out = render_header();
    rule(&mut out);

    line(&mut out, RECIPES_HEADING);
    out.push_str(&render_filter_bar(view.criteria()));
    out.push('\n');
    out.push_str(&render_recipe_list(&view.visible_recipes()));

    if let Some(recipe) = view.selected_recipe() {
        rule(&mut out);
        out.push_str(&render_detail(recipe));
    }

    rule(&mut out);
    out.push_str(&render_tips(view.tips()));
    rule(&mut out);
    out.push_str(&render_footer());
    out
}
