pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Home:
  Enter         Login with Pocket (request a new token)
  a             Continue to the authorization check
  E             Show error details
  Esc           Quit

Authorization:
  Esc           Back to home (after a failure)

Anywhere:
  ?             Toggle this help
  Ctrl + Q      Quit
"#
        .to_string()
    }
}
