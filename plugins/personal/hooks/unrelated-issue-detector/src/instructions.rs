/// Reason attached to the block directive. Static text: nothing from the
/// transcript is ever echoed back into the agent loop.
pub const INVESTIGATION_INSTRUCTIONS: &str = "\
STOP. You just called a problem \"unrelated\", \"pre-existing\" or out of scope. \
That claim needs evidence before you move on.\n\
\n\
Launch an investigation agent with the Task tool using exactly these parameters:\n\
- subagent_type: \"general-purpose\"\n\
- isolation: \"worktree\"\n\
- model: \"haiku\"\n\
- run_in_background: true\n\
\n\
Give it the COMPLETE description of the problem you dismissed: error output, \
symptoms, affected files and functions, and the commands that surfaced it. \
It works in its own worktree and cannot see this conversation.\n\
\n\
The investigation agent must:\n\
1. Restate the dismissed problem in one paragraph.\n\
2. Check out the main branch in its worktree (`git checkout main`) so it runs \
against code without the current changes.\n\
3. Try to reproduce the exact same problem there.\n\
4. If it REPRODUCES on main, the problem really is pre-existing: file it with \
`gh issue create`, giving a title prefixed with the affected component, the full \
description, reproduction steps on main, expected vs actual behavior, the note \
\"Discovered while working on <branch-name>\", and the label `bug`.\n\
5. If it does NOT reproduce on main, the current changes introduced it: report \
that back and stop.\n\
\n\
When the investigation agent reports:\n\
- Issue filed: continue with your task.\n\
- Not reproducible on main: the problem is yours. Fix it before doing anything \
else, and do not dismiss it again.\n\
\n\
Do not skip this step and do not dismiss problems without evidence.";
