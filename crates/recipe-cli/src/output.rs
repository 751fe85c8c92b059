use console::Style;
use recipe_core::detail::RecipeDetail;
use recipe_core::filter::display_tag;
use recipe_core::recipe::Recipe;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    emphasized: Style,
    tag: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold().underlined(),
            label: Style::new().dim(),
            value: Style::new(),
            emphasized: Style::new().bold().white(),
            tag: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}".repeat(title.chars().count().max(8)))
    );
    println!();
}

pub fn print_recipe_list(recipes: &[&Recipe], total: usize) {
    let s = Styles::new();
    print_title(&s, &format!("Recipes ({}/{})", recipes.len(), total));

    if recipes.is_empty() {
        println!("  {}", s.label.apply_to("No recipe matches"));
        println!();
        return;
    }

    let width = recipes
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    for recipe in recipes {
        let tags: Vec<String> = recipe.tags.iter().map(|t| display_tag(t)).collect();
        println!(
            "  {:<width$}{}",
            recipe.label,
            s.tag.apply_to(tags.join(", ")),
            width = width
        );
    }
    println!();
}

pub fn print_tags(tags: &[(String, usize)]) {
    let s = Styles::new();
    print_title(&s, "Tags");
    for (tag, count) in tags {
        println!(
            "  {:<20}{}",
            s.tag.apply_to(display_tag(tag)),
            s.label.apply_to(format!("{count} recipe(s)"))
        );
    }
    println!();
}

pub fn print_detail(detail: &RecipeDetail, scale: &str) {
    let s = Styles::new();
    print_title(&s, &detail.title);

    println!("  {:<10}{}", s.label.apply_to("Scale"), s.value.apply_to(scale));
    if !detail.img.is_empty() {
        println!("  {:<10}{}", s.label.apply_to("Image"), s.path.apply_to(&detail.img));
    }
    println!();

    println!("  {}", s.header.apply_to("Ingrédients"));
    for line in &detail.ingredients {
        let quantity = line.quantity_text();
        let quantity = if line.emphasized {
            s.emphasized.apply_to(quantity)
        } else {
            s.value.apply_to(quantity)
        };
        println!("    {} - {}", line.label, quantity);
    }
    println!();

    println!("  {}", s.header.apply_to("Étapes"));
    for step in &detail.steps {
        println!("    {step}");
    }
    println!();
}
