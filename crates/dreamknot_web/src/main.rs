// Trunk entrypoint. On wasm32 with `--features web` the binding wires the page
// at load; native builds print the page contract the binding expects.

fn main() {
    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    for controller in dreamknot_web::dom_contract::Controller::all() {
        let required = controller.required();
        if required.is_empty() {
            println!("{:<15} (always wired)", controller.label());
        } else {
            println!("{:<15} {}", controller.label(), required.join(", "));
        }
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    dreamknot_web::start();
}
