fn main() {
    chess_rules::terminal::run_interactive_terminal();
}
