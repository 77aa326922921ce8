use card_quiz::{QuizApp, build_game, load_config};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let game = match build_game(load_config()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("no se pudo preparar el juego: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Quiz de cartas",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(game)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let game = match build_game(load_config()) {
            Ok(game) => game,
            Err(e) => {
                log::error!("no se pudo preparar el juego: {e}");
                return;
            }
        };

        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas #the_canvas_id");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(QuizApp::new(game)))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("eframe no arrancó: {e:?}");
        }
    });
}
