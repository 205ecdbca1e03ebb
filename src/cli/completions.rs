use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    reprise completions bash > ~/.bash_completion.d/reprise\n\n\
                  Generate zsh completions:\n    reprise completions zsh > ~/.zfunc/_reprise\n\n\
                  Generate fish completions:\n    reprise completions fish > ~/.config/fish/completions/reprise.fish\n\n\
                  Generate PowerShell completions:\n    reprise completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
