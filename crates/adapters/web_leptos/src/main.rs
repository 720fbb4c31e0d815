use folio_adapter_web_leptos::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting folio front end");

    leptos::mount::mount_to_body(App);
}
