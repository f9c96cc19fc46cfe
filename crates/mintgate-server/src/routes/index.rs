use axum::response::Html;

const INDEX_HTML: &str = concat!(
    "<!DOCTYPE html>\n<html>\n<head>\n",
    "  <title>Farcaster Frame Demo</title>\n",
    "  <meta name=\"description\" content=\"Farcaster Frame demo for NFT mint gating\" />\n",
    "</head>\n",
    "<body>\n",
    "<main style=\"padding:2rem;font-family:Arial, sans-serif\">\n",
    "  <h1>Farcaster Frame Demo</h1>\n",
    "  <p>Ez a demo alkalmazás egy Farcaster frame létrehozását mutatja be, amely megköveteli a ",
    "felhasználótól, hogy lájkolja és recastolja a kijelölt castot, mielőtt hozzáférne a mint gombhoz.</p>\n",
    "  <p><a href=\"/api/frame?type=start\">Frame elindítása</a></p>\n",
    "</main>\n",
    "</body>\n</html>\n",
);

/// GET / — landing page linking to the first frame.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_links_to_start_stage() {
        let Html(body) = index().await;
        assert!(body.contains("<title>Farcaster Frame Demo</title>"));
        assert!(body.contains("href=\"/api/frame?type=start\""));
    }
}
