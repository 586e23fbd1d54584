use crate::CLAP_STYLING;
use clap::arg;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("wafprobe")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wafprobe")
        .about(
            "Sends a fixed set of legitimate and hostile requests to a domain and records how \
            the WAF in front of it answers, in a spreadsheet report.",
        )
        .styles(CLAP_STYLING)
        .arg(
            arg!([DOMAIN])
                .required(false)
                .help("The domain to probe, e.g. example.com (prompted for when omitted)"),
        )
}
