use formulario_perguntas::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
