use reciformat::readers::{read_document, Reader, UrlReader};
use reciformat::{format_recipe, ReciformatError, Settings};

fn create_recipe_html(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            <script type="application/ld+json">
                {json_ld}
            </script>
        </head>
        <body>
            <h1>Recipe</h1>
        </body>
        </html>
        "#
    )
}

#[tokio::test]
async fn test_fetch_and_format() {
    let mut server = mockito::Server::new_async().await;
    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": "BBC Good Food Recipe",
        "author": [
            {"@type": "Person", "name": "Chef One"},
            {"@type": "Person", "name": "Chef Two"}
        ],
        "recipeIngredient": ["ingredient 1", "ingredient 2"],
        "recipeInstructions": ["Cook the food"]
    }
    "#;

    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(create_recipe_html(json_ld))
        .create_async()
        .await;

    let url = format!("{}/recipe", server.url());
    let document = read_document(&url, &Settings::default()).await.unwrap();
    let markdown = format_recipe(&document).unwrap();

    assert!(markdown.starts_with("# BBC Good Food Recipe\n"));
    assert!(markdown.contains("Author: Chef One, Chef Two  \n"));
    assert!(markdown.contains("1. Cook the food\n"));
}

#[tokio::test]
async fn test_http_error_is_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let reader = UrlReader::new(&Settings::default());
    let url = format!("{}/missing", server.url());
    assert!(reader.handles(&url));

    let err = reader.read(&url).await.unwrap_err();
    assert!(matches!(err, ReciformatError::FetchError(_)));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_page_without_recipe_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/blog")
        .with_status(200)
        .with_body("<html><body><p>Just a story about soup.</p></body></html>")
        .create_async()
        .await;

    let url = format!("{}/blog", server.url());
    let document = read_document(&url, &Settings::default()).await.unwrap();
    assert!(format_recipe(&document).unwrap_err().is_not_found());
}
