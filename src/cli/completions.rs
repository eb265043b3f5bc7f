use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    flatdeploy completions bash > ~/.bash_completion.d/flatdeploy\n\n\
                  Generate zsh completions:\n    flatdeploy completions zsh > ~/.zfunc/_flatdeploy\n\n\
                  Generate fish completions:\n    flatdeploy completions fish > ~/.config/fish/completions/flatdeploy.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
