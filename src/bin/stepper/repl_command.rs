use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{all_consuming, map, map_res, opt, value};
use nom::sequence::{delimited, preceded};
use nom::IResult;

const DEFAULT_FRONTIER_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Help,
    Start,
    Step(usize),
    Run,
    Reset,
    Frontier(usize),
    Stats,
    Show,
}

impl ReplCommand {
    pub fn parse(input: &str) -> Option<Self> {
        all_consuming(delimited(
            space0,
            alt((
                value(ReplCommand::Exit, alt((tag("exit"), tag("quit")))),
                value(ReplCommand::Help, tag("help")),
                value(ReplCommand::Start, tag("start")),
                Self::parse_step,
                value(ReplCommand::Run, tag("run")),
                value(ReplCommand::Reset, tag("reset")),
                Self::parse_frontier,
                value(ReplCommand::Stats, tag("stats")),
                value(ReplCommand::Show, tag("show")),
            )),
            space0,
        ))(input)
        .ok()
        .map(|(_, cmd)| cmd)
    }

    fn parse_count(input: &str) -> IResult<&str, Option<usize>> {
        opt(preceded(space1, map_res(digit1, str::parse)))(input)
    }

    fn parse_step(input: &str) -> IResult<&str, ReplCommand> {
        map(preceded(tag("step"), Self::parse_count), |count| {
            ReplCommand::Step(count.unwrap_or(1))
        })(input)
    }

    fn parse_frontier(input: &str) -> IResult<&str, ReplCommand> {
        map(preceded(tag("frontier"), Self::parse_count), |count| {
            ReplCommand::Frontier(count.unwrap_or(DEFAULT_FRONTIER_LIMIT))
        })(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_commands() {
        assert_eq!(ReplCommand::parse("exit"), Some(ReplCommand::Exit));
        assert_eq!(ReplCommand::parse("quit"), Some(ReplCommand::Exit));
        assert_eq!(ReplCommand::parse("help"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("start"), Some(ReplCommand::Start));
        assert_eq!(ReplCommand::parse("run"), Some(ReplCommand::Run));
        assert_eq!(ReplCommand::parse("reset"), Some(ReplCommand::Reset));
        assert_eq!(ReplCommand::parse("stats"), Some(ReplCommand::Stats));
        assert_eq!(ReplCommand::parse("  show "), Some(ReplCommand::Show));
    }

    #[test]
    fn parse_counts() {
        assert_eq!(ReplCommand::parse("step"), Some(ReplCommand::Step(1)));
        assert_eq!(ReplCommand::parse("step 25"), Some(ReplCommand::Step(25)));
        assert_eq!(
            ReplCommand::parse("frontier"),
            Some(ReplCommand::Frontier(DEFAULT_FRONTIER_LIMIT))
        );
        assert_eq!(
            ReplCommand::parse("frontier 3"),
            Some(ReplCommand::Frontier(3))
        );
    }

    #[test]
    fn reject_unknown_input() {
        assert_eq!(ReplCommand::parse(""), None);
        assert_eq!(ReplCommand::parse("steps"), None);
        assert_eq!(ReplCommand::parse("step -1"), None);
        assert_eq!(ReplCommand::parse("step 99999999999999999999999"), None);
        assert_eq!(ReplCommand::parse("run 3"), None);
    }
}
