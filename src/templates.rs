use tera::{Context, Tera};

/// Loaded once at startup.
pub fn load() -> anyhow::Result<Tera> {
    let tera = Tera::new("templates/**/*.html")?;
    Ok(tera)
}

pub fn render(tera: &Tera, name: &str, ctx: &Context) -> anyhow::Result<String> {
    Ok(tera.render(name, ctx)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_renders_index_with_empty_collection() {
        let tera = load().expect("templates load");
        let mut ctx = Context::new();
        ctx.insert("products", &Vec::<crate::products::model::Product>::new());
        let html = render(&tera, "index.html", &ctx).expect("render index");
        assert!(html.contains("<h1>Products</h1>"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let tera = load().expect("templates load");
        assert!(render(&tera, "missing.html", &Context::new()).is_err());
    }
}
