/// Side effects requested by the reducer, run by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Execute(String),
    ReloadMenu,
    GenerateMail,
    SaveMail(String),
}
