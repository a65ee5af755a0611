/*!
# Labels, Calls and Conditions

## Labels

A label names the line after it. Labels are collected when the script
loads so a label may be used before the line that declares it.
`function` is another spelling of `label`.

```text
label greet
Print Hello\n
Return
```

Label names are case sensitive. Declaring the same name twice is not an
error; the last declaration is the one that counts.

## Where a script starts

A script runs from its first line unless one line starts with `entry`
or `main`. That line is then the first one run. When several lines are
marked, the last one wins.

```text
label greet
Print Hello\n
Return
main
greet
End
```

## Calls

`Goto label` and a line holding nothing but a label name both call.
The line after the call is remembered, then execution continues at the
label. `Return` goes back to the most recently remembered line.

```text
Goto greet
Print back again\n
```

Every `Goto` is remembered, even one that never returns. A loop built
from `Goto` alone will eventually run out of room and stop the script
with `CALL STACK TOO DEEP`. The default limit is 6048 calls and can be
changed with `--stack-depth`.

`Return` with nothing remembered goes back to the line after the most
recent outermost call.

## Break

The first call made while nothing is remembered also stores its return
line in the register `SCS`. `Break` forgets every remembered call and
continues at that line. It is the way out of deeply nested calls.

```text
main
Goto outer
Print done\n
End
label outer
Goto inner
label inner
Break
```

## Conditions

A condition is `lhs op rhs`. Both sides are expanded first.

| op | holds when |
|----|------------|
| `is` | both sides are the same text |
| `not` | the sides differ |
| `like` | `lhs` matches the whole of the regular expression `rhs` |

A `like` that matches writes the whole match to register `0` and each
group to `1`, `2` and so on. A failed match leaves them alone.

```text
Set line abc123
If ${line} like ([a-z]+)([0-9]+)
Print letters ${1} digits ${2}\n
EndIf
```

## If blocks

`If lhs op rhs` runs the lines up to the next `EndIf` when the condition
holds and skips past that `EndIf` when it does not. Each side of a block
condition is a single word.

Blocks do not nest. A skipped block ends at the first `EndIf` found, even
if another `If` comes first.

## Trailing if

Any command can be made conditional by following it with
` if lhs op rhs`.

```text
Goto retry if ${status} not ok
```

Trailing conditions are only looked at on lines the script reaches by
stepping forward outside of `If` blocks. On a line reached by a call,
`Return`, `Break`, or inside a block, the whole line is the command.
*/
