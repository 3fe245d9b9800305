use gdk4::Key;

pub fn on_key_press<F>(on_press: F) -> gtk4::EventControllerKey
where
    F: Fn(Key, u32) + 'static,
{
    let controller = gtk4::EventControllerKey::new();

    controller.connect_key_pressed(move |_, keyval, keycode, _| {
        on_press(keyval, keycode);
        gtk4::glib::Propagation::Proceed
    });

    controller
}
