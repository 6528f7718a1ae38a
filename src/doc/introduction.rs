/*!
# Introductory Tutorial for RPN

Begin by opening a terminal and running the executable. The usage summary
is printed first and then the prompt waits for input.
Type CTRL-D or `q` to exit.
<pre><code>&nbsp;  RPN calculator (Reverse Polish Notation)
&nbsp;  ...
&nbsp;rpn> █
</code></pre>

In Reverse Polish Notation the numbers come first and the operator
follows. There are no parentheses and no precedence to remember. Every
number you type is pushed on a stack. An operator takes its operands off
the stack and pushes the result back.

<pre><code>&nbsp;rpn> 3 4 +
&nbsp;= 7
</code></pre>

The `7` is now on the stack so you can keep going. Words are separated by
spaces or tabs and may be spread over as many lines as you like.

<pre><code>&nbsp;rpn> 2 *
&nbsp;= 14
</code></pre>

The left operand is the one you typed first. `10 4 -` is six, not
negative six.

## Functions

`sqrt`, `sin`, `cos` and `tan` work on the top of the stack. The
trigonometric functions take degrees.

<pre><code>&nbsp;rpn> 90 sin
&nbsp;= 1
&nbsp;rpn> 2 10 pow
&nbsp;= 1024
</code></pre>

`pow` raises the second value to the power of the top value.

## Looking at the stack

`p` shows the top of the stack and `s` shows the top eight slots.
Slot 1 is the top. Empty slots show as zero.

<pre><code>&nbsp;rpn> c 1 2 3 s
&nbsp;[stack cleared]
&nbsp;Stack:
&nbsp;8. 0.000000
&nbsp;7. 0.000000
&nbsp;6. 0.000000
&nbsp;5. 0.000000
&nbsp;4. 0.000000
&nbsp;3. 1.000000
&nbsp;2. 2.000000
&nbsp;1. 3.000000
</code></pre>

## Mistakes

A mistake never loses your work. When an operation fails its operands
are put back where they were.

<pre><code>&nbsp;rpn> 10 0 /
&nbsp;?DIVISION BY ZERO IN '/'
&nbsp;rpn> p
&nbsp;top: 0
</code></pre>

A word that is neither a number nor a command is reported and skipped.
The rest of the line still runs. Press CTRL-C to abandon what is left of
a line.

*/
