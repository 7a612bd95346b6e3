use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    todo_api::cli::run().await
}
