use crate::render::{glyph, COLUMNS};
use minijinja::Environment;

pub fn init_templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();

    env.add_template("index.html", include_str!("../../templates/index.html"))?;
    env.add_template("error.html", include_str!("../../templates/error.html"))?;

    env.add_global("columns", minijinja::Value::from_serialize(COLUMNS));

    // Renders support flags as check/cross marks
    env.add_filter("glyph", |value: Option<bool>| glyph(value).to_string());

    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_glyph_filter() {
        let mut env = init_templates().unwrap();
        env.add_template("t", "{{ a|glyph }}{{ b|glyph }}{{ c|glyph }}").unwrap();

        let out = env
            .get_template("t")
            .unwrap()
            .render(context! { a => true, b => false, c => () })
            .unwrap();
        assert_eq!(out, "✅❌–");
    }

    #[test]
    fn test_index_renders_without_a_view() {
        let env = init_templates().unwrap();
        let out = env
            .get_template("index.html")
            .unwrap()
            .render(context! {
                search_query => "",
                ask_query => "",
                filters => crate::catalog::SearchFilters::default(),
            })
            .unwrap();

        assert!(out.contains("API Genie"));
        assert!(!out.contains("<table"));
    }
}
